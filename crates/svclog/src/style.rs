//! crates/svclog/src/style.rs
//! ANSI styling for console lines.

use std::fmt;

use anstyle::{AnsiColor, Color, Style};

use crate::level::{Level, level_text};

const BADGE: Style = Style::new()
    .fg_color(Some(Color::Ansi(AnsiColor::Black)))
    .bg_color(Some(Color::Ansi(AnsiColor::Red)));
const INFO: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::White)));
const VERBOSE: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan)));
pub(crate) const TIMESTAMP: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)));
pub(crate) const POSITION: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue)));

/// Style applied to the level name of a console line.
pub(crate) const fn level_style(level: Level) -> Style {
    match level {
        Level::Panic | Level::Error => BADGE,
        Level::Info => INFO,
        Level::Debug | Level::Trace => VERBOSE,
        Level::Off | Level::All => Style::new(),
    }
}

/// Text that renders wrapped in a style when painting is enabled.
pub(crate) struct Painted<'a> {
    style: Style,
    text: &'a str,
}

impl<'a> Painted<'a> {
    /// Wraps `text` in `style`, or in a plain style when `enabled` is false.
    pub(crate) const fn new(style: Style, text: &'a str, enabled: bool) -> Self {
        let style = if enabled { style } else { Style::new() };
        Self { style, text }
    }
}

impl fmt::Display for Painted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.style.render(),
            self.text,
            self.style.render_reset()
        )
    }
}

/// Level name wrapped in its severity badge.
///
/// PANIC and ERROR render black on red, INFO white, DEBUG and TRACE cyan.
/// OFF, ALL, and unknown values render without escapes.
///
/// ```
/// use svclog::{color_level_text, Level};
///
/// let badge = color_level_text(Level::Error.value());
/// assert!(badge.contains("ERROR"));
/// assert!(badge.starts_with('\u{1b}'));
/// ```
#[must_use]
pub fn color_level_text(value: i32) -> String {
    match Level::from_i32(value) {
        Some(level) => Painted::new(level_style(level), level.as_str(), true).to_string(),
        None => level_text(value).to_owned(),
    }
}
