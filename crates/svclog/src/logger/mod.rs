//! crates/svclog/src/logger/mod.rs
//! The logger: thresholds, service tag, and the shared console output.

use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Mutex, PoisonError, RwLock};

use svclog_sink::RoutedSink;

use crate::config::LoggerConfig;
use crate::level::Level;

mod builder;
mod entry;
mod output;

pub use builder::LoggerBuilder;

type BoxedWriter = Box<dyn Write + Send>;

/// Leveled logger with independent console and remote thresholds.
///
/// A logger is built once and shared, usually as `Arc<Logger>`. All methods
/// take `&self` and may be called from any thread.
///
/// Each entry point first checks the level against the larger of the two
/// thresholds; when that gate fails nothing is formatted. Records that pass
/// are written to the console only when the level is within the console
/// threshold. INFO, DEBUG, and TRACE lines go to the standard writer; PANIC
/// and ERROR lines go to the error writer. The remote threshold takes part in
/// the gate, but no record is ever sent to the remote endpoint.
///
/// ```
/// use svclog::{Context, Level, Logger, SharedBuffer};
///
/// let standard = SharedBuffer::new();
/// let logger = Logger::builder()
///     .console_level(Level::Debug)
///     .standard(standard.clone())
///     .build();
///
/// logger.debugf(&Context::background(), format_args!("cache warmed in {}ms", 12));
/// assert!(standard.contents_lossy().ends_with("DEBUG || cache warmed in 12ms\n"));
/// ```
pub struct Logger {
    console_level: AtomicI32,
    remote_level: AtomicI32,
    service: RwLock<String>,
    remote: Option<String>,
    color: bool,
    console: Mutex<RoutedSink<BoxedWriter, BoxedWriter>>,
}

impl Logger {
    /// Starts building a logger that writes to standard output and standard error.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Builds a logger from `config`, writing to standard output and standard error.
    #[must_use]
    pub fn from_config(config: &LoggerConfig) -> Self {
        LoggerBuilder::from_config(config).build()
    }

    /// Overwrites both thresholds.
    ///
    /// No validation is applied: a threshold below every level silences the
    /// sink, one above every level lets everything through. The two values are
    /// stored one after the other, so a concurrent reader may briefly observe
    /// the new console threshold with the old remote one.
    pub fn set_level(&self, console: impl Into<i32>, remote: impl Into<i32>) {
        self.console_level.store(console.into(), Ordering::Relaxed);
        self.remote_level.store(remote.into(), Ordering::Relaxed);
    }

    /// Current console threshold.
    #[must_use]
    pub fn console_level(&self) -> i32 {
        self.console_level.load(Ordering::Relaxed)
    }

    /// Current remote threshold.
    #[must_use]
    pub fn remote_level(&self) -> i32 {
        self.remote_level.load(Ordering::Relaxed)
    }

    /// The larger of the two thresholds.
    #[must_use]
    pub fn max_level(&self) -> i32 {
        self.console_level().max(self.remote_level())
    }

    /// Reports whether a call at `level` would build a record.
    ///
    /// Useful to skip expensive argument construction.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        level != Level::Off && level.enabled_at(self.max_level())
    }

    /// Sets the service name recorded on every subsequent message.
    pub fn set_service(&self, name: impl Into<String>) {
        *self.service.write().unwrap_or_else(PoisonError::into_inner) = name.into();
    }

    /// The registered service name; empty until one is set.
    #[must_use]
    pub fn service(&self) -> String {
        self.service
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The configured remote endpoint.
    ///
    /// Remote delivery is not implemented; the endpoint is informational.
    #[must_use]
    pub fn remote_endpoint(&self) -> Option<&str> {
        self.remote.as_deref()
    }

    /// Whether console lines are coloured.
    #[must_use]
    pub const fn color(&self) -> bool {
        self.color
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("console_level", &self.console_level())
            .field("remote_level", &self.remote_level())
            .field("service", &self.service())
            .field("remote", &self.remote)
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}
