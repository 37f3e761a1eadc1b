//! Log level definitions
//!
//! Levels are ranked by urgency: `ERROR` is rank 0 and `FINE` is rank 4.
//! A lower rank is more severe. Ranks outside the known range are still
//! representable so that a raw numeric level can be used directly.

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogLevel(i32);

impl LogLevel {
    pub const ERROR: LogLevel = LogLevel(0);
    pub const WARN: LogLevel = LogLevel(1);
    pub const INFO: LogLevel = LogLevel(2);
    pub const DEBUG: LogLevel = LogLevel(3);
    pub const FINE: LogLevel = LogLevel(4);

    /// The five known levels, most severe first.
    pub const ALL: [LogLevel; 5] = [
        LogLevel::ERROR,
        LogLevel::WARN,
        LogLevel::INFO,
        LogLevel::DEBUG,
        LogLevel::FINE,
    ];

    /// Build a level from its raw rank. Unknown ranks are allowed.
    #[must_use]
    pub const fn from_rank(rank: i32) -> Self {
        LogLevel(rank)
    }

    #[inline]
    #[must_use]
    pub const fn rank(self) -> i32 {
        self.0
    }

    #[must_use]
    pub const fn is_known(self) -> bool {
        self.0 >= LogLevel::ERROR.0 && self.0 <= LogLevel::FINE.0
    }

    /// Canonical short name, or `None` for an out-of-range rank
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("ERROR"),
            1 => Some("WARN"),
            2 => Some("INFO"),
            3 => Some("DEBUG"),
            4 => Some("FINE"),
            _ => None,
        }
    }

    /// Whether a threshold of `self` lets a message at `level` through.
    ///
    /// A message passes when it is as severe as the threshold or more so.
    ///
    /// ```
    /// use rust_level_logger::LogLevel;
    ///
    /// assert!(LogLevel::WARN.admits(LogLevel::ERROR));
    /// assert!(LogLevel::WARN.admits(LogLevel::WARN));
    /// assert!(!LogLevel::WARN.admits(LogLevel::INFO));
    /// ```
    #[inline]
    #[must_use]
    pub const fn admits(self, level: LogLevel) -> bool {
        level.0 <= self.0
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::INFO
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "UNKNOWN_LOG_LEVEL({})", self.0),
        }
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_uppercase().as_str() {
            "ERROR" => Ok(LogLevel::ERROR),
            "WARN" | "WARNING" => Ok(LogLevel::WARN),
            "INFO" => Ok(LogLevel::INFO),
            "DEBUG" => Ok(LogLevel::DEBUG),
            "FINE" => Ok(LogLevel::FINE),
            _ => trimmed
                .parse::<i32>()
                .map(LogLevel::from_rank)
                .map_err(|_| LoggerError::invalid_level(s)),
        }
    }
}
