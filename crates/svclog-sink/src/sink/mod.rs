use std::fmt;

use crate::line_mode::LineMode;

/// Output sink that routes rendered lines to a standard or an error writer.
///
/// The sink owns both writers together with one scratch buffer. Each write
/// clears the buffer, renders the line into it, applies the configured
/// [`LineMode`], and hands the bytes to the writer chosen by the caller's
/// [`Stream`](crate::Stream). The buffer is shared by both streams, so a sink
/// holds at most one allocation regardless of how output is routed.
///
/// # Examples
///
/// ```
/// use svclog_sink::{LineMode, RoutedSink, Stream};
///
/// let mut sink = RoutedSink::with_line_mode(Vec::new(), Vec::new(), LineMode::WithoutNewline);
/// sink.write_with(Stream::Standard, |scratch| {
///     scratch.extend_from_slice(format!("{} of {}", 1, 3).as_bytes());
///     Ok(())
/// })?;
///
/// assert_eq!(sink.standard(), b"1 of 3");
/// assert!(sink.error().is_empty());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct RoutedSink<O, E> {
    standard: O,
    error: E,
    scratch: Vec<u8>,
    line_mode: LineMode,
}

mod constructors;
mod writing;

impl<O, E> fmt::Debug for RoutedSink<O, E>
where
    O: fmt::Debug,
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoutedSink")
            .field("standard", &self.standard)
            .field("error", &self.error)
            .field("scratch_capacity", &self.scratch.capacity())
            .field("line_mode", &self.line_mode)
            .finish()
    }
}
