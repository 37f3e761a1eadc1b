//! Basic logger usage example
//!
//! Demonstrates component-tagged loggers sharing the process-wide level.
//!
//! Run with: cargo run --example basic_usage

use rust_level_logger::prelude::*;
use rust_level_logger::{fine, warn};
use std::sync::Arc;

#[derive(Debug)]
#[allow(dead_code)]
struct DbState {
    status: &'static str,
    pool_size: u32,
}

fn main() -> Result<()> {
    println!("=== Rust Level Logger - Basic Usage Example ===\n");

    // Default sink: stdout with a date/time stamp
    let app = Logger::new("App", None);

    // Plain stdout sink shared by two components
    let plain = Arc::new(Sink::stdout().with_timestamp(None));
    let worker = Logger::new("Worker", Some(Arc::clone(&plain)));
    let untagged = Logger::new("", Some(plain));

    println!("1. Default level is {}:", global_min_level());
    app.error("This is an error message");
    app.warn("This is a warning message");
    app.info("This is an info message");
    app.debug("Debug message (hidden)");

    println!("\n2. Raising verbosity to FINE:");
    set_global_min_level(LogLevel::FINE);
    warn!(worker, "Job {} failed for user {}", 123, "Alice");
    untagged.debug("No component tag on this line");
    fine!(
        worker,
        "DB state: {:?}",
        DbState {
            status: "Connected",
            pool_size: 8
        }
    );

    println!("\n3. Lowering verbosity to WARN:");
    set_global_min_level(LogLevel::WARN);
    worker.error("boom");
    worker.info("skip (hidden)");

    app.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
