//! # Rust Level Logger
//!
//! A small leveled logger. Messages carry one of five severities and an
//! optional component tag, pass through a single process-wide minimum level,
//! and are written as one line each to a shared sink:
//!
//! ```text
//! [WARN][Worker] Job 123 failed for user Alice
//! [DEBUG] no component tag here
//! ```
//!
//! ## Example
//!
//! ```
//! use rust_level_logger::prelude::*;
//! use rust_level_logger::warn;
//! use std::sync::Arc;
//!
//! set_global_min_level(LogLevel::FINE);
//!
//! let sink = Arc::new(Sink::plain(std::io::sink()));
//! let logger = Logger::new("Worker", Some(sink));
//! warn!(logger, "Job {} failed for user {}", 123, "Alice");
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        global_min_level, is_enabled, override_global_min_level, set_global_min_level,
        GlobalLevelGuard, LogLevel, Logger, LoggerBuilder, LoggerError, Result, Sink, SinkMetrics,
        TimestampFormat,
    };
}

pub use core::{
    global_min_level, is_enabled, override_global_min_level, set_global_min_level,
    GlobalLevelGuard, LogLevel, Logger, LoggerBuilder, LoggerError, Result, Sink, SinkMetrics,
    TimestampFormat,
};
