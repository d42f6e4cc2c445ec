//! Record construction and console output.

use std::sync::PoisonError;

use svclog_sink::Stream;

use super::Logger;
use crate::call_site::{CallSite, position_text};
use crate::context::Context;
use crate::level::Level;
use crate::message::LogMessage;

/// Stream a record at `level` is routed to.
pub(crate) const fn stream_for(level: i32) -> Stream {
    if level > Level::Error.value() {
        Stream::Standard
    } else {
        Stream::Error
    }
}

impl Logger {
    /// Builds a record for a call that already passed the gate and outputs it.
    pub(super) fn emit(&self, ctx: &Context, level: Level, site: Option<CallSite>, text: String) {
        let message = LogMessage::new(
            ctx.correlation_id().map(str::to_owned),
            self.service(),
            position_text(site),
            level,
            text,
        );
        self.output(&message);
    }

    /// Routes a record to the console when the console threshold allows it.
    ///
    /// The remote threshold is not consulted here: remote delivery does not exist.
    pub fn output(&self, message: &LogMessage) {
        if message.level <= self.console_level() {
            self.console_output(message);
        }
    }

    fn console_output(&self, message: &LogMessage) {
        let stream = stream_for(message.level);
        let result = {
            let mut sink = self.console.lock().unwrap_or_else(PoisonError::into_inner);
            sink.write_with(stream, |scratch| message.render_console(scratch, self.color))
        };

        if let Err(error) = result {
            tracing::warn!(
                target: "svclog::output",
                %stream,
                %error,
                "failed to write log line"
            );
        }
    }

    /// Flushes both console writers, ignoring failures.
    pub fn flush(&self) {
        let result = self
            .console
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush();
        if let Err(error) = result {
            tracing::warn!(target: "svclog::output", %error, "failed to flush log writers");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_levels_route_to_standard() {
        for level in [Level::Info, Level::Debug, Level::Trace, Level::All] {
            assert_eq!(stream_for(level.value()), Stream::Standard);
        }
    }

    #[test]
    fn severe_levels_route_to_error() {
        for level in [Level::Off, Level::Panic, Level::Error] {
            assert_eq!(stream_for(level.value()), Stream::Error);
        }
    }
}
