use std::io::{self, Write};
use std::sync::atomic::AtomicI32;
use std::sync::{Mutex, RwLock};

use svclog_sink::{LineMode, RoutedSink};

use super::{BoxedWriter, Logger};
use crate::config::LoggerConfig;

/// Builder for [`Logger`].
///
/// Defaults: INFO for both thresholds, no service name, no remote endpoint,
/// no colour, [`LineMode::WithNewline`], standard output and standard error.
#[must_use = "call build() to obtain a Logger"]
pub struct LoggerBuilder {
    console_level: i32,
    remote_level: i32,
    service: String,
    remote: Option<String>,
    color: bool,
    line_mode: LineMode,
    standard: Option<BoxedWriter>,
    error: Option<BoxedWriter>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Creates a builder with the defaults listed above.
    pub fn new() -> Self {
        Self::from_config(&LoggerConfig::default())
    }

    /// Creates a builder seeded from `config`.
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self {
            console_level: config.console_level,
            remote_level: config.remote_level,
            service: String::new(),
            remote: config.remote.clone(),
            color: config.color,
            line_mode: config.line_mode,
            standard: None,
            error: None,
        }
    }

    /// Sets the console threshold.
    pub fn console_level(mut self, level: impl Into<i32>) -> Self {
        self.console_level = level.into();
        self
    }

    /// Sets the remote threshold.
    pub fn remote_level(mut self, level: impl Into<i32>) -> Self {
        self.remote_level = level.into();
        self
    }

    /// Sets the initial service name.
    pub fn service(mut self, name: impl Into<String>) -> Self {
        self.service = name.into();
        self
    }

    /// Records a remote endpoint.
    pub fn remote(mut self, endpoint: impl Into<String>) -> Self {
        self.remote = Some(endpoint.into());
        self
    }

    /// Enables or disables ANSI colours on console lines.
    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Sets the line termination of console lines.
    pub fn line_mode(mut self, line_mode: LineMode) -> Self {
        self.line_mode = line_mode;
        self
    }

    /// Replaces the writer that receives INFO, DEBUG, and TRACE lines.
    ///
    /// The writer runs while the logger's output lock is held. It must not log
    /// through the same logger, directly or through an installed
    /// `LoggerLayer` with a target outside `svclog`:
    /// the lock is not reentrant and the thread would deadlock.
    pub fn standard<W>(mut self, writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        self.standard = Some(Box::new(writer));
        self
    }

    /// Replaces the writer that receives PANIC and ERROR lines.
    ///
    /// The same reentrancy restriction as [`standard`](Self::standard) applies.
    pub fn error<W>(mut self, writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        self.error = Some(Box::new(writer));
        self
    }

    /// Builds the logger.
    #[must_use]
    pub fn build(self) -> Logger {
        let standard = self
            .standard
            .unwrap_or_else(|| Box::new(io::stdout()) as BoxedWriter);
        let error = self
            .error
            .unwrap_or_else(|| Box::new(io::stderr()) as BoxedWriter);

        Logger {
            console_level: AtomicI32::new(self.console_level),
            remote_level: AtomicI32::new(self.remote_level),
            service: RwLock::new(self.service),
            remote: self.remote,
            color: self.color,
            console: Mutex::new(RoutedSink::with_line_mode(standard, error, self.line_mode)),
        }
    }
}

impl From<&LoggerConfig> for LoggerBuilder {
    fn from(config: &LoggerConfig) -> Self {
        Self::from_config(config)
    }
}
