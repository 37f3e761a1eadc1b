//! Output destination shared by loggers
//!
//! A `Sink` wraps any [`Write`] destination. Each line is assembled in full
//! (optional stamp, text, newline) and handed to the destination in one
//! `write_all` while the sink's lock is held, so lines written concurrently
//! through the same sink never interleave.
//!
//! A failed write is counted and reported on stderr, on the first failure and
//! every 1000th after it. Reporting is best effort and never panics.

use super::{
    error::{LoggerError, Result},
    metrics::SinkMetrics,
    timestamp::TimestampFormat,
};
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};

pub struct Sink {
    writer: Mutex<Box<dyn Write + Send>>,
    timestamp: Option<TimestampFormat>,
    name: String,
    metrics: SinkMetrics,
}

impl Sink {
    /// Wrap a destination, stamping each line with [`TimestampFormat::Standard`]
    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self::named("writer", Box::new(writer), Some(TimestampFormat::Standard))
    }

    /// Wrap a destination without any stamp.
    ///
    /// Lines come out exactly as the logger formats them, which is what tests
    /// comparing output byte for byte want.
    ///
    /// ```
    /// use rust_level_logger::{Logger, Sink};
    /// use std::sync::Arc;
    ///
    /// let sink = Arc::new(Sink::plain(std::io::sink()));
    /// let logger = Logger::new("Docs", Some(sink));
    /// logger.error("quiet");
    /// ```
    pub fn plain<W: Write + Send + 'static>(writer: W) -> Self {
        Self::named("writer", Box::new(writer), None)
    }

    pub(crate) fn named(
        name: impl Into<String>,
        writer: Box<dyn Write + Send>,
        timestamp: Option<TimestampFormat>,
    ) -> Self {
        Self {
            writer: Mutex::new(writer),
            timestamp,
            name: name.into(),
            metrics: SinkMetrics::new(),
        }
    }

    /// Replace the stamp; `None` turns stamping off
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: Option<TimestampFormat>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn timestamp(&self) -> Option<&TimestampFormat> {
        self.timestamp.as_ref()
    }

    /// Short description of the destination, used in diagnostics
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn metrics(&self) -> &SinkMetrics {
        &self.metrics
    }

    /// Write `text` as one line, prefixed by the stamp if one is configured.
    ///
    /// A newline is added unless `text` already ends with one.
    pub fn write_line(&self, text: &str) -> Result<()> {
        let mut line = String::with_capacity(text.len() + 24);
        if let Some(ref timestamp) = self.timestamp {
            line.push_str(&timestamp.now());
            line.push(' ');
        }
        line.push_str(text);
        if !line.ends_with('\n') {
            line.push('\n');
        }

        let result = self.writer.lock().write_all(line.as_bytes());
        match result {
            Ok(()) => {
                self.metrics.record_written();
                Ok(())
            }
            Err(source) => {
                let previous = self.metrics.record_failed();
                let error = LoggerError::io_operation(
                    "writing log line",
                    format!("sink '{}' rejected the write", self.name),
                    source,
                );
                if should_report_failure(previous) {
                    report_write_failure(&mut io::stderr().lock(), &self.name, previous + 1, &error);
                }
                Err(error)
            }
        }
    }

    pub fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }
}

/// Report on the first failure and every 1000th after it, given the failure
/// count before this one.
fn should_report_failure(previous: u64) -> bool {
    previous == 0 || (previous + 1).is_multiple_of(1000)
}

fn report_write_failure<W: Write>(out: &mut W, sink: &str, failed: u64, error: &LoggerError) {
    let _ = writeln!(
        out,
        "[LOGGER ERROR] Sink '{}' failed ({} failed writes so far): {}",
        sink, failed, error
    );
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("name", &self.name)
            .field("timestamp", &self.timestamp)
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

impl Drop for Sink {
    fn drop(&mut self) {
        let _ = self.writer.get_mut().flush();
    }
}
