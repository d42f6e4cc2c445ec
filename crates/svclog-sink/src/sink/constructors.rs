use super::RoutedSink;
use crate::line_mode::LineMode;

impl<O, E> RoutedSink<O, E> {
    /// Creates a sink that terminates every line with a newline.
    #[must_use]
    pub fn new(standard: O, error: E) -> Self {
        Self::with_line_mode(standard, error, LineMode::WithNewline)
    }

    /// Creates a sink with the provided [`LineMode`].
    #[must_use]
    pub fn with_line_mode(standard: O, error: E, line_mode: LineMode) -> Self {
        Self {
            standard,
            error,
            scratch: Vec::new(),
            line_mode,
        }
    }

    /// Returns the current [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Borrows the standard writer.
    #[must_use]
    pub fn standard(&self) -> &O {
        &self.standard
    }

    /// Borrows the error writer.
    #[must_use]
    pub fn error(&self) -> &E {
        &self.error
    }

    /// Capacity currently held by the scratch buffer.
    #[must_use]
    pub fn scratch_capacity(&self) -> usize {
        self.scratch.capacity()
    }
}
