use crate::catalog::error::CatalogError;
use log::LevelFilter;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_fetch_error(&self, error: &CatalogError) -> LogLevel {
        match error {
            // Non-critical: Temporary server issues
            CatalogError::Http { status, .. } if *status == 429 => LogLevel::Debug,
            CatalogError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Critical: Auth, malformed responses
            CatalogError::Http { status, .. } if *status == 401 => LogLevel::Error,
            CatalogError::Http { status, .. } if *status == 403 => LogLevel::Error,
            CatalogError::Decode(_) => LogLevel::Error,
            CatalogError::Io(_) => LogLevel::Error,

            // Network issues - usually temporary
            _ => LogLevel::Warn,
        }
    }

    /// Whether another attempt at the same fetch generation can succeed.
    pub fn is_retryable(&self, error: &CatalogError) -> bool {
        match error {
            CatalogError::Http { status, .. } => *status == 429 || (500..=599).contains(status),
            CatalogError::Reqwest(_) => true,
            CatalogError::Decode(_) | CatalogError::Io(_) => false,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}
