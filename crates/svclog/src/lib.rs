#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Overview
//!
//! `svclog` is a leveled logger for long-running services. Records carry a
//! severity, a timestamp, the source position of the call, an optional
//! correlation id, and free text. A [`Logger`] holds two thresholds: the
//! console threshold decides what is printed, and the remote threshold is
//! recorded for a collector that this crate does not talk to. A call is only
//! formatted when its level is within the larger of the two.
//!
//! # Design
//!
//! - [`Level`] is a small ordered enum; thresholds are plain `i32` values so
//!   that out-of-range settings simply switch every level on or off.
//! - [`Logger`] is built once and shared as `Arc<Logger>`. Thresholds are
//!   atomics, the service name sits behind a lock, and both console writers
//!   share one mutex-guarded [`RoutedSink`](svclog_sink::RoutedSink) with a
//!   reusable scratch buffer.
//! - INFO, DEBUG, and TRACE lines go to standard output. PANIC and ERROR
//!   lines go to standard error.
//! - Entry points are `#[track_caller]`, so positions point at application
//!   code. The [`log_info!`] family also records the enclosing function.
//! - [`Logger::error`] returns a [`LoggedError`] and [`Logger::panic`]
//!   diverges, whether or not the line itself was printed.
//!
//! # Console format
//!
//! ```text
//! 2024/03/05 07:08:09 - req-7 - src/pay.rs:10 charge() - INFO || charged
//! ```
//!
//! # Features
//!
//! - `bridge` (default): [`LoggerLayer`] forwards `tracing` events into a
//!   logger.
//! - `serde`: serialisation for [`LogMessage`] and [`LoggerConfig`].
//!
//! # Examples
//!
//! ```
//! use svclog::{Context, Level, Logger, SharedBuffer, log_info};
//!
//! let standard = SharedBuffer::new();
//! let logger = Logger::builder()
//!     .console_level(Level::Info)
//!     .standard(standard.clone())
//!     .build();
//! logger.set_service("payments");
//!
//! let ctx = Context::with_correlation_id("req-7");
//! logger.info(&ctx, &[&"charged", &42]);
//! log_info!(logger, ctx, "refunded {}", 7);
//! logger.debug(&ctx, &[&"not printed"]);
//!
//! let output = standard.contents_lossy();
//! assert_eq!(output.lines().count(), 2);
//! assert!(output.lines().all(|line| line.contains(" - req-7 - ")));
//! ```

use std::sync::Arc;

pub mod call_site;
mod config;
mod context;
mod error;
mod level;
mod logger;
mod macros;
mod message;
mod style;
#[cfg(feature = "bridge")]
mod tracing_bridge;

pub use call_site::{CallSite, UNKNOWN_CALLER, position_text};
pub use config::{CONSOLE_LEVEL_ENV, LoggerConfig, REMOTE_ENV, REMOTE_LEVEL_ENV};
pub use context::Context;
pub use error::{LoggedError, ParseLevelError};
pub use level::{INVALID_LEVEL, Level, level_text, level_value};
pub use logger::{Logger, LoggerBuilder};
pub use message::{LogMessage, TIMESTAMP_FORMAT, format_timestamp, timestamp_now};
pub use style::color_level_text;
pub use svclog_sink::{LineMode, SharedBuffer, Stream};
#[cfg(feature = "bridge")]
#[cfg_attr(docsrs, doc(cfg(feature = "bridge")))]
pub use tracing_bridge::{
    CORRELATION_FIELD, LoggerLayer, init_tracing, init_tracing_with_filter, try_init_tracing,
};

/// Builds a logger from the process environment.
///
/// Reads [`LoggerConfig::from_env`] once and writes to standard output and
/// standard error. Call it at startup and share the result.
///
/// ```no_run
/// let logger = svclog::init();
/// logger.info(&svclog::Context::background(), &[&"service started"]);
/// ```
#[must_use]
pub fn init() -> Arc<Logger> {
    let config = LoggerConfig::from_env();
    tracing::debug!(
        target: "svclog::config",
        console_level = config.console_level,
        remote_level = config.remote_level,
        remote = config.remote.as_deref().unwrap_or_default(),
        "logger configured from environment"
    );
    Arc::new(Logger::from_config(&config))
}
