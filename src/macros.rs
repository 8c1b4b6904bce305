//! Formatting macros for [`Logger`](crate::Logger).
//!
//! Each macro takes a logger expression followed by `format!`-style
//! arguments and returns the logger's `io::Result<usize>`, except
//! [`log_fatal!`] which never returns.

#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)*) => {
        $logger.print($crate::LogLevel::Trace, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.print($crate::LogLevel::Debug, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.print($crate::LogLevel::Info, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.print($crate::LogLevel::Warning, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.print($crate::LogLevel::Error, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_progress {
    ($logger:expr, $($arg:tt)*) => {
        $logger.print($crate::LogLevel::Progress, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)*) => {
        $logger.fatal(format_args!($($arg)*))
    };
}
