//! Level-specific entry points.
//!
//! Every severity has two forms. The plain form takes a slice of displayable
//! operands, joins them with single spaces, and terminates the text with a
//! newline. The `f` form takes pre-built [`fmt::Arguments`] and uses the
//! formatted text as is.

use std::fmt::{self, Write as _};

use super::Logger;
use crate::call_site::CallSite;
use crate::context::Context;
use crate::error::LoggedError;
use crate::level::Level;

/// Joins operands with spaces and appends a newline.
pub(crate) fn join_line(args: &[&dyn fmt::Display]) -> String {
    let mut text = String::new();
    for (index, arg) in args.iter().enumerate() {
        if index > 0 {
            text.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(text, "{arg}");
    }
    text.push('\n');
    text
}

impl Logger {
    /// Logs at PANIC, then panics with the message text.
    ///
    /// The panic happens whether or not the thresholds let the line through.
    #[track_caller]
    pub fn panic(&self, ctx: &Context, args: &[&dyn fmt::Display]) -> ! {
        self.panic_at(ctx, Some(CallSite::caller()), join_line(args))
    }

    /// Formatted form of [`panic`](Self::panic).
    #[track_caller]
    pub fn panicf(&self, ctx: &Context, args: fmt::Arguments<'_>) -> ! {
        self.panic_at(ctx, Some(CallSite::caller()), fmt::format(args))
    }

    /// Logs at ERROR and returns the message as a [`LoggedError`].
    ///
    /// The error is returned even when the thresholds suppress the line.
    #[track_caller]
    pub fn error(&self, ctx: &Context, args: &[&dyn fmt::Display]) -> LoggedError {
        self.error_at(ctx, Some(CallSite::caller()), join_line(args))
    }

    /// Formatted form of [`error`](Self::error).
    #[track_caller]
    pub fn errorf(&self, ctx: &Context, args: fmt::Arguments<'_>) -> LoggedError {
        self.error_at(ctx, Some(CallSite::caller()), fmt::format(args))
    }

    /// Logs at INFO.
    #[track_caller]
    pub fn info(&self, ctx: &Context, args: &[&dyn fmt::Display]) {
        if self.enabled(Level::Info) {
            self.emit(ctx, Level::Info, Some(CallSite::caller()), join_line(args));
        }
    }

    /// Formatted form of [`info`](Self::info).
    #[track_caller]
    pub fn infof(&self, ctx: &Context, args: fmt::Arguments<'_>) {
        if self.enabled(Level::Info) {
            self.emit(ctx, Level::Info, Some(CallSite::caller()), fmt::format(args));
        }
    }

    /// Logs at DEBUG.
    #[track_caller]
    pub fn debug(&self, ctx: &Context, args: &[&dyn fmt::Display]) {
        if self.enabled(Level::Debug) {
            self.emit(ctx, Level::Debug, Some(CallSite::caller()), join_line(args));
        }
    }

    /// Formatted form of [`debug`](Self::debug).
    #[track_caller]
    pub fn debugf(&self, ctx: &Context, args: fmt::Arguments<'_>) {
        if self.enabled(Level::Debug) {
            self.emit(ctx, Level::Debug, Some(CallSite::caller()), fmt::format(args));
        }
    }

    /// Logs at TRACE.
    #[track_caller]
    pub fn trace(&self, ctx: &Context, args: &[&dyn fmt::Display]) {
        if self.enabled(Level::Trace) {
            self.emit(ctx, Level::Trace, Some(CallSite::caller()), join_line(args));
        }
    }

    /// Formatted form of [`trace`](Self::trace).
    #[track_caller]
    pub fn tracef(&self, ctx: &Context, args: fmt::Arguments<'_>) {
        if self.enabled(Level::Trace) {
            self.emit(ctx, Level::Trace, Some(CallSite::caller()), fmt::format(args));
        }
    }

    /// Logs pre-rendered `text` at `level` with an explicit call site.
    ///
    /// A missing call site renders as
    /// [`UNKNOWN_CALLER`](crate::UNKNOWN_CALLER). `Level::Off` never emits.
    /// PANIC records are written but do not panic; use
    /// [`panic_at`](Self::panic_at) for that.
    pub fn log_at(
        &self,
        ctx: &Context,
        level: Level,
        site: Option<CallSite>,
        text: impl Into<String>,
    ) {
        if self.enabled(level) {
            self.emit(ctx, level, site, text.into());
        }
    }

    /// Logs `message` at ERROR with an explicit call site and returns it as an error.
    pub fn error_at(&self, ctx: &Context, site: Option<CallSite>, message: String) -> LoggedError {
        if self.enabled(Level::Error) {
            self.emit(ctx, Level::Error, site, message.clone());
        }
        LoggedError::new(message)
    }

    /// Logs `message` at PANIC with an explicit call site, then panics.
    #[track_caller]
    pub fn panic_at(&self, ctx: &Context, site: Option<CallSite>, message: String) -> ! {
        if self.enabled(Level::Panic) {
            self.emit(ctx, Level::Panic, site, message.clone());
        }
        panic!("{}", message.trim_end_matches('\n'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_line_separates_operands_and_terminates() {
        assert_eq!(join_line(&[&"boom"]), "boom\n");
        assert_eq!(join_line(&[&"retry", &3, &"of", &5]), "retry 3 of 5\n");
    }

    #[test]
    fn join_line_of_nothing_is_bare_newline() {
        assert_eq!(join_line(&[]), "\n");
    }
}
