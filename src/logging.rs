pub use crate::error_classifier::LogLevel;
use std::env;

pub fn get_rust_log_level() -> LogLevel {
    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    parse_rust_log_level(&rust_log)
}

const CRATE_TARGET: &str = "safe_connectors";

/// Threshold from a `RUST_LOG` value. A `safe_connectors=` directive wins over
/// a bare level; otherwise the first directive is used.
pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    let directives: Vec<&str> = rust_log.split(',').map(str::trim).collect();
    let directive = directives
        .iter()
        .find(|d| d.split('=').next() == Some(CRATE_TARGET) && d.contains('='))
        .or_else(|| directives.iter().find(|d| !d.contains('=')))
        .or_else(|| directives.first())
        .copied()
        .unwrap_or_default();

    level_from_str(directive.rsplit('=').next().unwrap_or(directive))
}

fn level_from_str(level: &str) -> LogLevel {
    match level.to_lowercase().as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info,
    }
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

pub fn should_log_with_env(event_level: LogLevel) -> bool {
    let threshold = get_rust_log_level();
    should_log(event_level, threshold)
}

/// Caps the `log` facade at the `RUST_LOG` threshold.
pub fn init_max_level() {
    log::set_max_level(get_rust_log_level().into());
}
