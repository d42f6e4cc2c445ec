//! Integration tests for logging from many threads through one shared logger.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use svclog::{Context, Level, Logger, SharedBuffer};

const THREADS: usize = 8;
const LINES_PER_THREAD: usize = 200;

// ============================================================================
// Shared Logger Tests
// ============================================================================

/// Verifies concurrent writers never interleave bytes within a line.
#[test]
fn concurrent_lines_stay_whole() {
    let standard = SharedBuffer::new();
    let error = SharedBuffer::new();
    let logger = Arc::new(
        Logger::builder()
            .console_level(Level::Debug)
            .standard(standard.clone())
            .error(error.clone())
            .build(),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|worker| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                let ctx = Context::with_correlation_id(format!("worker-{worker}"));
                for line in 0..LINES_PER_THREAD {
                    if line % 10 == 0 {
                        let _ = logger.errorf(&ctx, format_args!("w{worker} n{line}"));
                    } else {
                        logger.debugf(&ctx, format_args!("w{worker} n{line}"));
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker thread completes");
    }

    let mut seen = HashSet::new();
    for buffer in [&standard, &error] {
        for line in buffer.contents_lossy().lines() {
            let (_, text) = line.split_once(" || ").expect("line has text separator");
            let (worker, _) = text.split_once(' ').expect("text has two tokens");
            assert!(
                line.contains(&format!(" - worker-{} - ", &worker[1..])),
                "correlation id does not match text: {line:?}"
            );
            assert!(seen.insert(text.to_owned()), "duplicate line {text:?}");
        }
    }
    assert_eq!(seen.len(), THREADS * LINES_PER_THREAD);
    assert_eq!(error.contents_lossy().lines().count(), THREADS * LINES_PER_THREAD / 10);
}

/// Verifies threshold and service updates from one thread are seen by others.
#[test]
fn settings_are_visible_across_threads() {
    let standard = SharedBuffer::new();
    let logger = Arc::new(Logger::builder().standard(standard.clone()).build());

    {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            logger.set_level(Level::Trace, Level::Off);
            logger.set_service("indexer");
        })
        .join()
        .expect("setter thread completes");
    }

    assert_eq!(logger.console_level(), Level::Trace.value());
    assert_eq!(logger.service(), "indexer");
    logger.trace(&Context::background(), &[&"visible"]);
    assert!(standard.contents_lossy().contains("TRACE || visible"));
}
