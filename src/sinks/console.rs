//! Console sinks

use crate::core::{Sink, TimestampFormat};
use std::io;

impl Sink {
    /// Standard output, stamped with local date and time.
    ///
    /// This is the sink a logger gets when none is supplied.
    pub fn stdout() -> Self {
        Sink::named("stdout", Box::new(io::stdout()), Some(TimestampFormat::Standard))
    }

    /// Standard error, stamped with local date and time
    pub fn stderr() -> Self {
        Sink::named("stderr", Box::new(io::stderr()), Some(TimestampFormat::Standard))
    }
}

impl Default for Sink {
    fn default() -> Self {
        Self::stdout()
    }
}
