// Copyright (c) sqlog.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Logging macros for convenient usage
//!
//! Every macro takes the target logger explicitly; there is no hidden
//! global dispatch, so tests can hand a logger its own registry.

/// Main logging macro with support for structured fields
#[macro_export]
macro_rules! log {
    // Format string with arguments
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let message = format!($($arg)+);
        let record = $crate::Record::new(
            $level,
            module_path!(),
            message,
        )
        .with_location(file!(), line!());
        $logger.log(record);
    }};
}

/// Trace level logging
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)*)
    };
}

/// Debug level logging
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)*)
    };
}

/// Info level logging
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)*)
    };
}

/// Warning level logging
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)*)
    };
}

/// Error level logging
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)*)
    };
}

/// Critical level logging
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)*)
    };
}

/// Structured logging macro with fields
#[macro_export]
macro_rules! log_with_fields {
    ($logger:expr, $level:expr, $msg:expr, $($key:expr => $value:expr),+ $(,)?) => {{
        let mut record = $crate::Record::new(
            $level,
            module_path!(),
            $msg,
        )
        .with_location(file!(), line!());
        $(
            record = record.with_field($key, $value);
        )+
        $logger.log(record);
    }};
}

/// Info level logging with structured fields
#[macro_export]
macro_rules! info_with_fields {
    ($logger:expr, $msg:expr, $($key:expr => $value:expr),+ $(,)?) => {
        $crate::log_with_fields!($logger, $crate::LogLevel::Info, $msg, $($key => $value),+)
    };
}

/// Debug level logging with structured fields
#[macro_export]
macro_rules! debug_with_fields {
    ($logger:expr, $msg:expr, $($key:expr => $value:expr),+ $(,)?) => {
        $crate::log_with_fields!($logger, $crate::LogLevel::Debug, $msg, $($key => $value),+)
    };
}

/// Error level logging with structured fields
#[macro_export]
macro_rules! error_with_fields {
    ($logger:expr, $msg:expr, $($key:expr => $value:expr),+ $(,)?) => {
        $crate::log_with_fields!($logger, $crate::LogLevel::Error, $msg, $($key => $value),+)
    };
}
