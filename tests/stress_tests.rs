//! Stress tests for concurrent logging
//!
//! These tests verify:
//! - Many threads logging through one sink lose no lines and never interleave
//! - Several loggers sharing a sink stay line-aligned
//! - Changing the global level while logging neither deadlocks nor corrupts output
//! - Logging from async tasks on a multi-threaded runtime

use parking_lot::Mutex;
use regex::Regex;
use rust_level_logger::prelude::*;
use rust_level_logger::info;
use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

static GLOBAL_LEVEL: Mutex<()> = parking_lot::const_mutex(());

/// Writer that forwards each `write` call in small pieces, so a sink that
/// did not hold its lock for the whole line would interleave output.
#[derive(Clone, Default)]
struct ChunkedBuffer(Arc<Mutex<Vec<u8>>>);

impl ChunkedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().clone()).expect("utf-8 output")
    }
}

impl Write for ChunkedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = buf.len().min(7);
        self.0.lock().extend_from_slice(&buf[..n]);
        thread::yield_now();
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_concurrent_threads_no_lost_or_corrupt_lines() {
    let _lock = GLOBAL_LEVEL.lock();
    let _guard = override_global_min_level(LogLevel::FINE);

    const THREADS: usize = 100;
    const MESSAGES_PER_THREAD: usize = 10;

    let buffer = ChunkedBuffer::default();
    let logger = Logger::new("ThreadTest", Some(Arc::new(Sink::plain(buffer.clone()))));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = logger.clone();
            thread::spawn(move || {
                for m in 0..MESSAGES_PER_THREAD {
                    info!(logger, "Thread {}: Message {}", t, m);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let output = buffer.contents();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), THREADS * MESSAGES_PER_THREAD);

    let pattern = Regex::new(r"^\[INFO\]\[ThreadTest\] Thread (\d+): Message (\d+)$").unwrap();
    let mut seen = HashSet::new();
    for line in &lines {
        let caps = pattern
            .captures(line)
            .unwrap_or_else(|| panic!("corrupt line {:?}", line));
        seen.insert((caps[1].to_string(), caps[2].to_string()));
    }
    assert_eq!(seen.len(), THREADS * MESSAGES_PER_THREAD);
    assert_eq!(logger.sink().metrics().lines_written(), (THREADS * MESSAGES_PER_THREAD) as u64);
}

#[test]
fn test_loggers_sharing_a_sink_stay_aligned() {
    let _lock = GLOBAL_LEVEL.lock();
    let _guard = override_global_min_level(LogLevel::FINE);

    let buffer = ChunkedBuffer::default();
    let sink = Arc::new(Sink::plain(buffer.clone()));

    let handles: Vec<_> = ["Api", "Db", "Cache", ""]
        .into_iter()
        .map(|component| {
            let logger = Logger::new(component, Some(Arc::clone(&sink)));
            thread::spawn(move || {
                for i in 0..200 {
                    logger.warn(format_args!("event {}", i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let pattern = Regex::new(r"^\[WARN\](\[(Api|Db|Cache)\])? event \d+$").unwrap();
    let output = buffer.contents();
    assert_eq!(output.lines().count(), 800);
    assert!(output.lines().all(|line| pattern.is_match(line)));
    assert_eq!(output.lines().filter(|l| l.starts_with("[WARN] ")).count(), 200);
}

#[test]
fn test_level_changes_while_logging() {
    let _lock = GLOBAL_LEVEL.lock();
    let _guard = override_global_min_level(LogLevel::INFO);

    let buffer = ChunkedBuffer::default();
    let logger = Logger::new("Race", Some(Arc::new(Sink::plain(buffer.clone()))));
    let stop = Arc::new(AtomicBool::new(false));

    let setters: Vec<_> = [LogLevel::INFO, LogLevel::DEBUG]
        .into_iter()
        .map(|level| {
            let stop = Arc::clone(&stop);
            thread::spawn(move || {
                while !stop.load(Ordering::Relaxed) {
                    set_global_min_level(level);
                }
            })
        })
        .collect();

    let writers: Vec<_> = (0..4)
        .map(|_| {
            let logger = logger.clone();
            thread::spawn(move || {
                for i in 0..250 {
                    logger.info(format_args!("always {}", i));
                    logger.debug(format_args!("maybe {}", i));
                    logger.fine("never");
                }
            })
        })
        .collect();

    for writer in writers {
        writer.join().expect("writer thread panicked");
    }
    stop.store(true, Ordering::Relaxed);
    for setter in setters {
        setter.join().expect("setter thread panicked");
    }

    let level = global_min_level();
    assert!(level == LogLevel::INFO || level == LogLevel::DEBUG);

    let output = buffer.contents();
    let pattern = Regex::new(r"^\[(INFO|DEBUG)\]\[Race\] (always|maybe) \d+$").unwrap();
    assert!(output.lines().all(|line| pattern.is_match(line)));
    // INFO is admitted by both thresholds in play; FINE by neither.
    assert_eq!(output.lines().filter(|l| l.starts_with("[INFO]")).count(), 1000);
    assert!(!output.contains("never"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_logging_from_async_tasks() {
    let _lock = GLOBAL_LEVEL.lock();
    let _guard = override_global_min_level(LogLevel::DEBUG);

    let buffer = ChunkedBuffer::default();
    let logger = Logger::new("Task", Some(Arc::new(Sink::plain(buffer.clone()))));

    let mut tasks = Vec::new();
    for t in 0..32 {
        let logger = logger.clone();
        tasks.push(tokio::spawn(async move {
            for m in 0..25 {
                logger.debug(format_args!("task {} step {}", t, m));
                tokio::task::yield_now().await;
            }
        }));
    }

    for task in tasks {
        task.await.expect("task panicked");
    }

    let pattern = Regex::new(r"^\[DEBUG\]\[Task\] task \d+ step \d+$").unwrap();
    let output = buffer.contents();
    assert_eq!(output.lines().count(), 32 * 25);
    assert!(output.lines().all(|line| pattern.is_match(line)));
}
