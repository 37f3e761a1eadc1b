//! Logging macros for ergonomic message formatting.
//!
//! The macros take the usual `format!` syntax and hand the logger a
//! [`format_args!`] value, so a message below the global level is never
//! rendered.
//!
//! # Examples
//!
//! ```
//! use rust_level_logger::prelude::*;
//! use rust_level_logger::info;
//!
//! let logger = Logger::new("Server", None);
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_level_logger::prelude::*;
/// # let logger = Logger::new("", Some(std::sync::Arc::new(Sink::plain(std::io::sink()))));
/// use rust_level_logger::log;
/// log!(logger, LogLevel::INFO, "Simple message");
/// log!(logger, LogLevel::ERROR, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, ::std::format_args!($($arg)+))
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_level_logger::prelude::*;
/// # let logger = Logger::new("", Some(std::sync::Arc::new(Sink::plain(std::io::sink()))));
/// use rust_level_logger::error;
/// error!(logger, "Failed with error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::ERROR, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::WARN, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::INFO, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_level_logger::prelude::*;
/// # let logger = Logger::new("", Some(std::sync::Arc::new(Sink::plain(std::io::sink()))));
/// use rust_level_logger::debug;
/// debug!(logger, "Debug info for process: {}", "xyz");
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::DEBUG, $($arg)+)
    };
}

/// Log a fine-level message, the least severe level.
///
/// `{:?}` gives the field-by-field view of a struct.
///
/// # Examples
///
/// ```
/// # use rust_level_logger::prelude::*;
/// # let logger = Logger::new("", Some(std::sync::Arc::new(Sink::plain(std::io::sink()))));
/// use rust_level_logger::fine;
///
/// #[derive(Debug)]
/// struct State {
///     status: &'static str,
/// }
///
/// fine!(logger, "DB state: {:?}", State { status: "Connected" });
/// ```
#[macro_export]
macro_rules! fine {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::FINE, $($arg)+)
    };
}
