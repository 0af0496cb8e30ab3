//! CLI command messaging system
//!
//! Consistent tagged output for one-shot commands like `pin`, `share` and
//! `configure`.

const TAG_INFO: &str = "\x1b[1;33m[INFO]\x1b[0m";
const TAG_WARN: &str = "\x1b[1;91m[WARN]\x1b[0m";
const TAG_ERROR: &str = "\x1b[1;31m[ERROR]\x1b[0m";
const TAG_SUCCESS: &str = "\x1b[1;32m[SUCCESS]\x1b[0m";

fn print_tagged(tag: &str, title: &str, details: &str) {
    if details.is_empty() {
        println!("{} {}", tag, title);
    } else {
        println!("{} {}\t {}", tag, title, details);
    }
}

pub fn print_info(title: &str, details: &str) {
    print_tagged(TAG_INFO, title, details);
}

pub fn print_warn(title: &str, details: &str) {
    print_tagged(TAG_WARN, title, details);
}

/// Errors go to stderr so headless output stays parseable.
pub fn print_error(title: &str, details: Option<&str>) {
    eprintln!("{} {}", TAG_ERROR, title);
    if let Some(details) = details {
        eprintln!("{} Details: {}", TAG_ERROR, details);
    }
}

pub fn print_success(title: &str, details: &str) {
    print_tagged(TAG_SUCCESS, title, details);
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_warn($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_error($title, None)
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_error($title, Some($details))
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_success($title, &format!($($details)*))
    };
}
