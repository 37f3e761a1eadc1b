//! Main logger implementation

use super::{
    error::Result,
    log_level::LogLevel,
    sink::Sink,
    threshold::global_min_level,
};
use std::fmt::{self, Write as _};
use std::sync::Arc;

/// A component-tagged handle onto a sink.
///
/// Loggers are immutable once built and cheap to clone. Whether a message is
/// written depends only on the process-wide level set with
/// [`set_global_min_level`](super::set_global_min_level).
#[derive(Debug, Clone)]
pub struct Logger {
    component: String,
    sink: Arc<Sink>,
}

impl Logger {
    /// Create a logger for `component` writing to `sink`.
    ///
    /// An empty component means no component tag. Without a sink the logger
    /// writes to standard output, stamped with the local date and time.
    #[must_use]
    pub fn new(component: impl Into<String>, sink: Option<Arc<Sink>>) -> Self {
        Self {
            component: component.into(),
            sink: sink.unwrap_or_else(|| Arc::new(Sink::stdout())),
        }
    }

    #[must_use]
    pub fn with_sink(component: impl Into<String>, sink: Arc<Sink>) -> Self {
        Self::new(component, Some(sink))
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn sink(&self) -> &Arc<Sink> {
        &self.sink
    }

    /// Whether a message at `level` would be written right now
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        global_min_level().admits(level)
    }

    /// Write `message` at `level` if the global level admits it.
    ///
    /// The line reads `[LEVEL][component] message`, or `[LEVEL] message`
    /// for a logger without a component. Nothing is formatted for a
    /// suppressed message. A failed write is counted and reported by the
    /// sink, never returned to the caller.
    pub fn log(&self, level: LogLevel, message: impl fmt::Display) {
        if !self.enabled(level) {
            return;
        }

        let mut line = String::with_capacity(64);
        // Writing into a String cannot fail.
        let _ = write!(line, "[{}]", level);
        if !self.component.is_empty() {
            let _ = write!(line, "[{}]", self.component);
        }
        let _ = write!(line, " {}", message);

        let _ = self.sink.write_line(&line);
    }

    #[inline]
    pub fn error(&self, message: impl fmt::Display) {
        self.log(LogLevel::ERROR, message);
    }

    #[inline]
    pub fn warn(&self, message: impl fmt::Display) {
        self.log(LogLevel::WARN, message);
    }

    #[inline]
    pub fn info(&self, message: impl fmt::Display) {
        self.log(LogLevel::INFO, message);
    }

    #[inline]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(LogLevel::DEBUG, message);
    }

    /// Fine-grained tracing detail, the least severe level
    #[inline]
    pub fn fine(&self, message: impl fmt::Display) {
        self.log(LogLevel::FINE, message);
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.flush()
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use rust_level_logger::prelude::*;
    /// use std::sync::Arc;
    ///
    /// let logger = Logger::builder()
    ///     .component("Worker")
    ///     .sink(Arc::new(Sink::stderr()))
    ///     .build();
    /// assert_eq!(logger.component(), "Worker");
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new("", None)
    }
}

/// Builder for constructing a Logger with a fluent API
#[derive(Debug, Default)]
pub struct LoggerBuilder {
    component: String,
    sink: Option<Arc<Sink>>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the component tag
    #[must_use = "builder methods return a new value"]
    pub fn component(mut self, component: impl Into<String>) -> Self {
        self.component = component.into();
        self
    }

    /// Share an existing sink
    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: Arc<Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Take ownership of a sink not shared with other loggers
    #[must_use = "builder methods return a new value"]
    pub fn owned_sink(self, sink: Sink) -> Self {
        self.sink(Arc::new(sink))
    }

    pub fn build(self) -> Logger {
        Logger::new(self.component, self.sink)
    }
}
