//! crates/svclog/src/level.rs
//! Severity levels, threshold comparison, and the level-name mapping.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseLevelError;

/// Value returned by [`level_value`] for names that match no level.
pub const INVALID_LEVEL: i32 = -1;

/// Severity of a log message.
///
/// Higher values are more verbose. A message at level `L` is written to a sink
/// whose threshold is `T` iff `L <= T`; thresholds are plain `i32` values so
/// that any integer, including ones outside the named range, can be used.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(i32)]
pub enum Level {
    /// Never emit.
    Off = 0,
    /// Unrecoverable failure; the call panics after logging.
    Panic = 1,
    /// Application-reported error.
    Error = 2,
    /// Informational message.
    Info = 3,
    /// Debugging detail.
    Debug = 4,
    /// Fine-grained tracing detail.
    Trace = 5,
    /// Emit everything.
    All = 10,
}

impl Level {
    /// Every named level in ascending order.
    pub const NAMED: [Self; 7] = [
        Self::Off,
        Self::Panic,
        Self::Error,
        Self::Info,
        Self::Debug,
        Self::Trace,
        Self::All,
    ];

    /// Numeric value of the level.
    #[must_use]
    pub const fn value(self) -> i32 {
        self as i32
    }

    /// Looks up the level with the given numeric value.
    #[must_use]
    pub const fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Off),
            1 => Some(Self::Panic),
            2 => Some(Self::Error),
            3 => Some(Self::Info),
            4 => Some(Self::Debug),
            5 => Some(Self::Trace),
            10 => Some(Self::All),
            _ => None,
        }
    }

    /// Upper-case name of the level.
    ///
    /// # Examples
    ///
    /// ```
    /// use svclog::Level;
    ///
    /// assert_eq!(Level::Info.as_str(), "INFO");
    /// assert_eq!(Level::All.as_str(), "ALL");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Panic => "PANIC",
            Self::Error => "ERROR",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
            Self::All => "ALL",
        }
    }

    /// Looks up a level by its exact upper-case name.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "OFF" => Some(Self::Off),
            "PANIC" => Some(Self::Panic),
            "ERROR" => Some(Self::Error),
            "INFO" => Some(Self::Info),
            "DEBUG" => Some(Self::Debug),
            "TRACE" => Some(Self::Trace),
            "ALL" => Some(Self::All),
            _ => None,
        }
    }

    /// Reports whether a message at this level passes `threshold`.
    ///
    /// ```
    /// use svclog::Level;
    ///
    /// assert!(Level::Error.enabled_at(Level::Info.value()));
    /// assert!(!Level::Debug.enabled_at(Level::Info.value()));
    /// assert!(!Level::Panic.enabled_at(-7));
    /// ```
    #[must_use]
    pub const fn enabled_at(self, threshold: i32) -> bool {
        self.value() <= threshold
    }
}

impl From<Level> for i32 {
    fn from(level: Level) -> Self {
        level.value()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::from_token(input).ok_or_else(|| ParseLevelError::new(input))
    }
}

/// Maps a level name to its numeric value, or [`INVALID_LEVEL`] when unknown.
///
/// Matching is exact and case-sensitive.
///
/// ```
/// use svclog::{level_value, INVALID_LEVEL};
///
/// assert_eq!(level_value("DEBUG"), 4);
/// assert_eq!(level_value("debug"), INVALID_LEVEL);
/// ```
#[must_use]
pub fn level_value(token: &str) -> i32 {
    Level::from_token(token).map_or(INVALID_LEVEL, Level::value)
}

/// Maps a numeric level to its name; values with no named level give `""`.
#[must_use]
pub fn level_text(value: i32) -> &'static str {
    Level::from_i32(value).map_or("", Level::as_str)
}
