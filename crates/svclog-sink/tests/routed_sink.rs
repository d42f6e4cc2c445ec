//! Integration tests for routed output.
//!
//! These tests drive [`RoutedSink`] through [`SharedBuffer`] writers the way
//! the logger does: one sink behind one mutex, shared by many threads.

use std::io::Write;
use std::sync::{Arc, Mutex};
use std::thread;

use svclog_sink::{LineMode, RoutedSink, SharedBuffer, Stream};

// ============================================================================
// Routing Tests
// ============================================================================

/// Verifies each stream only receives the lines routed to it.
#[test]
fn streams_receive_only_their_lines() {
    let standard = SharedBuffer::new();
    let error = SharedBuffer::new();
    let mut sink = RoutedSink::new(standard.clone(), error.clone());

    sink.write_line(Stream::Standard, "one").expect("write succeeds");
    sink.write_line(Stream::Error, "two").expect("write succeeds");
    sink.write_line(Stream::Standard, "three").expect("write succeeds");

    assert_eq!(standard.contents_lossy(), "one\nthree\n");
    assert_eq!(error.contents_lossy(), "two\n");
}

/// Verifies a verbatim sink leaves unterminated lines joined.
#[test]
fn verbatim_mode_keeps_lines_as_rendered() {
    let standard = SharedBuffer::new();
    let mut sink =
        RoutedSink::with_line_mode(standard.clone(), SharedBuffer::new(), LineMode::WithoutNewline);

    sink.write_line(Stream::Standard, "first").expect("write succeeds");
    sink.write_line(Stream::Standard, "second\n").expect("write succeeds");

    assert_eq!(sink.line_mode(), LineMode::WithoutNewline);
    assert_eq!(standard.contents_lossy(), "firstsecond\n");
}

/// Verifies flush reaches both writers without error.
#[test]
fn flush_succeeds_for_in_memory_writers() {
    let mut sink = RoutedSink::new(SharedBuffer::new(), SharedBuffer::new());
    sink.write_line(Stream::Error, "x").expect("write succeeds");
    sink.flush().expect("flush succeeds");
}

// ============================================================================
// Concurrency Tests
// ============================================================================

/// Verifies lines written from several threads through one mutex stay whole.
#[test]
fn concurrent_lines_do_not_interleave() {
    const THREADS: usize = 8;
    const LINES: usize = 200;

    let standard = SharedBuffer::new();
    let sink = Arc::new(Mutex::new(RoutedSink::new(
        standard.clone(),
        SharedBuffer::new(),
    )));

    let handles: Vec<_> = (0..THREADS)
        .map(|id| {
            let sink = Arc::clone(&sink);
            thread::spawn(move || {
                for n in 0..LINES {
                    let mut sink = sink.lock().expect("sink lock");
                    sink.write_with(Stream::Standard, |scratch| {
                        write!(scratch, "thread-{id} line-{n}")
                    })
                    .expect("write succeeds");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread completes");
    }

    let output = standard.contents_lossy();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), THREADS * LINES);
    for line in lines {
        let (thread, number) = line.split_once(' ').expect("two fields");
        assert!(thread.starts_with("thread-"));
        assert!(number.starts_with("line-"));
    }
}
