//! Process-wide minimum severity gate
//!
//! Every [`Logger`](super::Logger) consults this single value before it
//! formats a message. The value lives behind one reader/writer lock: reads
//! proceed concurrently, a write excludes everything else, and no reader can
//! observe a partially written level.
//!
//! A write is not ordered against a log call racing with it on another
//! thread. Only the lock itself establishes happens-before.

use super::log_level::LogLevel;
use parking_lot::{const_rwlock, RwLock};

static GLOBAL_MIN_LEVEL: RwLock<LogLevel> = const_rwlock(LogLevel::INFO);

/// Replace the minimum level for all loggers in the process.
///
/// Concurrent callers race; the last write wins.
pub fn set_global_min_level(level: LogLevel) {
    *GLOBAL_MIN_LEVEL.write() = level;
}

/// Current minimum level. `INFO` until first changed.
#[inline]
#[must_use]
pub fn global_min_level() -> LogLevel {
    *GLOBAL_MIN_LEVEL.read()
}

/// Whether a message at `level` would currently be emitted
#[inline]
#[must_use]
pub fn is_enabled(level: LogLevel) -> bool {
    global_min_level().admits(level)
}

/// Set the global level and get a guard that puts the previous level back
/// when dropped.
///
/// # Example
///
/// ```
/// use rust_level_logger::{global_min_level, override_global_min_level, LogLevel};
///
/// let before = global_min_level();
/// {
///     let _guard = override_global_min_level(LogLevel::FINE);
///     assert_eq!(global_min_level(), LogLevel::FINE);
/// }
/// assert_eq!(global_min_level(), before);
/// ```
#[must_use = "the previous level is restored as soon as the guard is dropped"]
pub fn override_global_min_level(level: LogLevel) -> GlobalLevelGuard {
    let mut current = GLOBAL_MIN_LEVEL.write();
    let previous = std::mem::replace(&mut *current, level);
    GlobalLevelGuard { previous }
}

/// Restores the global minimum level captured by [`override_global_min_level`]
#[derive(Debug)]
pub struct GlobalLevelGuard {
    previous: LogLevel,
}

impl GlobalLevelGuard {
    /// Level that will be restored on drop
    pub fn previous(&self) -> LogLevel {
        self.previous
    }
}

impl Drop for GlobalLevelGuard {
    fn drop(&mut self) {
        set_global_min_level(self.previous);
    }
}

/// Serialises unit tests in this crate that touch the global level.
#[cfg(test)]
pub(crate) fn test_lock() -> parking_lot::MutexGuard<'static, ()> {
    static LOCK: parking_lot::Mutex<()> = parking_lot::const_mutex(());
    LOCK.lock()
}
