#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/svclog-sink/src/lib.rs
//!
//! # Overview
//!
//! `svclog-sink` provides the output plumbing used by the `svclog` logger. It
//! knows nothing about severity levels: callers pick a [`Stream`] for each line
//! and the sink writes the rendered bytes to the matching writer.
//!
//! # Design
//!
//! The crate exposes [`RoutedSink`], which owns a standard writer, an error
//! writer, and a single scratch buffer shared by both. Every line is staged in
//! the scratch buffer (reset, append, write) so repeated writes reuse the same
//! allocation. Callers that share a sink between threads wrap it in a single
//! mutex; the whole reset/append/write sequence then happens under that lock
//! and lines from different threads never interleave.
//!
//! # Invariants
//!
//! - The scratch buffer is cleared before each line and never shrunk.
//! - [`LineMode::WithNewline`] terminates a line that does not already end in
//!   `'\n'`; it never doubles an existing terminator.
//! - A line is handed to the underlying writer with one `write_all` call.
//!
//! # Errors
//!
//! All write operations surface [`std::io::Error`] values from the underlying
//! writer unchanged.
//!
//! # Examples
//!
//! ```
//! use svclog_sink::{RoutedSink, Stream};
//!
//! let mut sink = RoutedSink::new(Vec::new(), Vec::new());
//! sink.write_line(Stream::Standard, "ready").unwrap();
//! sink.write_line(Stream::Error, "failed\n").unwrap();
//!
//! assert_eq!(sink.standard(), b"ready\n");
//! assert_eq!(sink.error(), b"failed\n");
//! ```

mod capture;
mod line_mode;
mod sink;
mod stream;

pub use capture::SharedBuffer;
pub use line_mode::LineMode;
pub use sink::RoutedSink;
pub use stream::Stream;
