//! File sink

use crate::core::{LoggerError, Result, Sink, TimestampFormat};
use std::fs::OpenOptions;
use std::path::Path;

impl Sink {
    /// Append to the file at `path`, creating it if needed.
    ///
    /// Lines are stamped with [`TimestampFormat::Standard`]; use
    /// [`Sink::with_timestamp`] to change that.
    ///
    /// ```no_run
    /// use rust_level_logger::{Logger, Sink};
    /// use std::sync::Arc;
    ///
    /// let sink = Arc::new(Sink::file("/var/log/app.log").unwrap());
    /// let logger = Logger::new("App", Some(sink));
    /// logger.info("started");
    /// ```
    pub fn file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.is_dir() {
            return Err(LoggerError::file_sink(
                path.display().to_string(),
                "path is a directory",
            ));
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;

        Ok(Sink::named(
            path.display().to_string(),
            Box::new(file),
            Some(TimestampFormat::Standard),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_file_sink_appends() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("app.log");
        fs::write(&path, "existing\n").unwrap();

        let sink = Sink::file(&path).unwrap().with_timestamp(None);
        sink.write_line("[INFO] appended").unwrap();
        sink.flush().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "existing\n[INFO] appended\n");
        assert!(sink.name().ends_with("app.log"));
    }

    #[test]
    fn test_file_sink_rejects_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        let err = Sink::file(temp_dir.path()).unwrap_err();
        assert!(matches!(err, LoggerError::FileSinkError { .. }));
    }
}
