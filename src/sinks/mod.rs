//! Standard sink constructors
//!
//! [`Sink`] itself lives in `core`; these modules add the ready-made
//! destinations for the process streams and files.

pub mod console;
pub mod file;

pub use crate::core::Sink;
