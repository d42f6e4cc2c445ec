use std::fmt;

/// Destination stream selected for a single line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Stream {
    /// The primary output, normally standard output.
    Standard,
    /// The high-severity output, normally standard error.
    Error,
}

impl Stream {
    /// Returns a short lowercase label for the stream.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
