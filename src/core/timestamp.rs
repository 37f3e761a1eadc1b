//! Timestamp formatting for sink line stamps
//!
//! A [`Sink`](super::Sink) may prefix each line with a date/time stamp. The
//! stamp belongs to the sink, never to the logger's prefix, so a sink built
//! without one produces the bare `[LEVEL] message` form.

use chrono::{DateTime, Local, Utc};
use std::fmt::Write as _;

/// Stamp styles a sink can put in front of each line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TimestampFormat {
    /// Local time as `2025/01/08 10:30:45`
    ///
    /// The classic line-logger stamp, used by the default sinks.
    #[default]
    Standard,

    /// UTC with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// RFC 3339 with offset: `2025-01-08T10:30:45.123456+00:00`
    Rfc3339,

    /// Any strftime-compatible format string
    ///
    /// ```
    /// use rust_level_logger::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%H:%M:%S".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Render the stamp for the current instant
    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Utc::now())
    }

    /// Format a UTC instant according to this format
    ///
    /// `Standard` and `Custom` render in the local time zone. A `Custom`
    /// format chrono cannot render falls back to `Standard`.
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Standard => datetime
                .with_timezone(&Local)
                .format("%Y/%m/%d %H:%M:%S")
                .to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Custom(format_str) => {
                let mut stamp = String::new();
                let local = datetime.with_timezone(&Local);
                if write!(stamp, "{}", local.format(format_str)).is_err() {
                    return TimestampFormat::Standard.format(datetime);
                }
                stamp
            }
        }
    }
}
