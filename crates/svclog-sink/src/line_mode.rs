/// Controls whether a [`RoutedSink`](crate::RoutedSink) terminates lines with a newline.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum LineMode {
    /// Terminate each line with `'\n'` unless the text already ends with one.
    #[default]
    WithNewline,
    /// Write each line exactly as rendered.
    WithoutNewline,
}

impl LineMode {
    /// Reports whether the mode terminates unterminated lines.
    ///
    /// # Examples
    ///
    /// ```
    /// use svclog_sink::LineMode;
    ///
    /// assert!(LineMode::WithNewline.append_newline());
    /// assert!(!LineMode::WithoutNewline.append_newline());
    /// ```
    #[must_use]
    pub const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }

    /// Appends the terminator to `buffer` when this mode requires one.
    pub(crate) fn terminate(self, buffer: &mut Vec<u8>) {
        if self.append_newline() && !buffer.ends_with(b"\n") {
            buffer.push(b'\n');
        }
    }
}

impl From<bool> for LineMode {
    /// `true` selects [`LineMode::WithNewline`], `false` selects
    /// [`LineMode::WithoutNewline`].
    fn from(append_newline: bool) -> Self {
        if append_newline {
            Self::WithNewline
        } else {
            Self::WithoutNewline
        }
    }
}

impl From<LineMode> for bool {
    fn from(mode: LineMode) -> Self {
        mode.append_newline()
    }
}

#[cfg(test)]
mod tests;
