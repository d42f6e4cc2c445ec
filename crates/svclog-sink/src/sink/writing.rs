use super::RoutedSink;
use crate::stream::Stream;
use std::io::{self, Write};

impl<O, E> RoutedSink<O, E>
where
    O: Write,
    E: Write,
{
    /// Writes `text` as a single line to `stream`.
    pub fn write_line(&mut self, stream: Stream, text: &str) -> io::Result<()> {
        self.write_with(stream, |scratch| {
            scratch.extend_from_slice(text.as_bytes());
            Ok(())
        })
    }

    /// Renders a line through `render` and writes it to `stream`.
    ///
    /// The closure receives the cleared scratch buffer. Nothing reaches the
    /// writer when the closure fails.
    pub fn write_with<F>(&mut self, stream: Stream, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        self.scratch.clear();
        render(&mut self.scratch)?;
        self.line_mode.terminate(&mut self.scratch);

        match stream {
            Stream::Standard => self.standard.write_all(&self.scratch),
            Stream::Error => self.error.write_all(&self.scratch),
        }
    }

    /// Flushes both writers, standard first.
    pub fn flush(&mut self) -> io::Result<()> {
        self.standard.flush()?;
        self.error.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_mode::LineMode;

    #[test]
    fn write_line_routes_by_stream() {
        let mut sink = RoutedSink::new(Vec::new(), Vec::new());
        sink.write_line(Stream::Standard, "info").expect("write succeeds");
        sink.write_line(Stream::Error, "error").expect("write succeeds");

        assert_eq!(sink.standard(), b"info\n");
        assert_eq!(sink.error(), b"error\n");
    }

    #[test]
    fn write_with_formats_into_scratch() {
        let mut sink = RoutedSink::new(Vec::new(), Vec::new());
        sink.write_with(Stream::Standard, |scratch| write!(scratch, "{}-{}", "a", 7))
            .expect("write succeeds");

        assert_eq!(sink.standard(), b"a-7\n");
    }

    #[test]
    fn existing_terminator_is_not_doubled() {
        let mut sink = RoutedSink::new(Vec::new(), Vec::new());
        sink.write_line(Stream::Error, "boom\n").expect("write succeeds");

        assert_eq!(sink.error(), b"boom\n");
    }

    #[test]
    fn without_newline_writes_verbatim() {
        let mut sink =
            RoutedSink::with_line_mode(Vec::new(), Vec::new(), LineMode::WithoutNewline);
        sink.write_line(Stream::Standard, "one").expect("write succeeds");
        sink.write_line(Stream::Standard, "two").expect("write succeeds");

        assert_eq!(sink.standard(), b"onetwo");
    }

    #[test]
    fn scratch_is_reset_between_lines() {
        let mut sink = RoutedSink::new(Vec::new(), Vec::new());
        sink.write_line(Stream::Error, "a much longer first line")
            .expect("write succeeds");
        sink.write_line(Stream::Error, "short").expect("write succeeds");

        let output = String::from_utf8(sink.error().clone()).expect("utf-8");
        assert_eq!(output, "a much longer first line\nshort\n");
    }

    #[test]
    fn scratch_allocation_is_reused() {
        let mut sink = RoutedSink::new(Vec::new(), Vec::new());
        sink.write_line(Stream::Standard, &"x".repeat(256))
            .expect("write succeeds");
        let capacity = sink.scratch_capacity();

        sink.write_line(Stream::Error, "tiny").expect("write succeeds");
        assert_eq!(sink.scratch_capacity(), capacity);
    }

    #[test]
    fn failed_render_writes_nothing() {
        let mut sink = RoutedSink::new(Vec::new(), Vec::new());
        let result = sink.write_with(Stream::Standard, |scratch| {
            scratch.extend_from_slice(b"half");
            Err(io::Error::other("render failed"))
        });

        assert!(result.is_err());
        assert!(sink.standard().is_empty());
    }
}
