//! Core logger types

pub mod error;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod sink;
pub mod threshold;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::SinkMetrics;
pub use sink::Sink;
pub use threshold::{
    global_min_level, is_enabled, override_global_min_level, set_global_min_level,
    GlobalLevelGuard,
};
pub use timestamp::TimestampFormat;
