//! crates/svclog/src/tracing_bridge.rs
//! Bridge from the tracing crate into a [`Logger`].
//!
//! [`LoggerLayer`] is a tracing-subscriber layer that turns tracing events into
//! log records, so libraries instrumented with `tracing` end up in the same
//! console output as direct logger calls.
//!
//! # Mapping
//!
//! - `ERROR` becomes [`Level::Error`]; `WARN` and `INFO` become
//!   [`Level::Info`]; `DEBUG` and `TRACE` keep their names.
//! - The `message` field is the record text. Other fields are appended as
//!   `name=value` pairs, except `correlation_id`, which fills the record's
//!   correlation id.
//! - The event's file and line become the call site. Events without them are
//!   positioned as [`UNKNOWN_CALLER`](crate::UNKNOWN_CALLER).
//! - Events whose target lies under `svclog` are dropped, so the logger's own
//!   diagnostics never feed back into it.
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use svclog::{Logger, init_tracing};
//!
//! init_tracing(Arc::new(Logger::builder().build()));
//! tracing::info!(correlation_id = "req-1", "request accepted");
//! ```

use std::fmt::{self, Write as _};
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context as LayerContext, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use crate::call_site::CallSite;
use crate::context::Context;
use crate::level::Level;
use crate::logger::Logger;

/// Event field whose value becomes the record's correlation id.
pub const CORRELATION_FIELD: &str = "correlation_id";

const OWN_TARGET: &str = "svclog";

/// A tracing layer that forwards events into a [`Logger`].
#[derive(Clone, Debug)]
pub struct LoggerLayer {
    logger: Arc<Logger>,
}

impl LoggerLayer {
    /// Creates a layer writing into `logger`.
    #[must_use]
    pub const fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }

    /// The logger events are forwarded to.
    #[must_use]
    pub const fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }

    const fn map_level(level: &tracing::Level) -> Level {
        match *level {
            tracing::Level::ERROR => Level::Error,
            tracing::Level::WARN | tracing::Level::INFO => Level::Info,
            tracing::Level::DEBUG => Level::Debug,
            tracing::Level::TRACE => Level::Trace,
        }
    }

    fn is_own_target(target: &str) -> bool {
        target.split("::").next() == Some(OWN_TARGET)
    }
}

impl<S> Layer<S> for LoggerLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: LayerContext<'_, S>) {
        let metadata = event.metadata();
        if Self::is_own_target(metadata.target()) {
            return;
        }

        let level = Self::map_level(metadata.level());
        if !self.logger.enabled(level) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let site = match (metadata.file(), metadata.line()) {
            (Some(file), Some(line)) => Some(CallSite::new(file, line, None)),
            _ => None,
        };
        let ctx = visitor
            .correlation_id
            .take()
            .map_or_else(Context::background, Context::with_correlation_id);

        self.logger.log_at(&ctx, level, site, visitor.into_text());
    }
}

/// Collects the message, the correlation id, and any remaining fields.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
    correlation_id: Option<String>,
    fields: String,
}

impl MessageVisitor {
    fn into_text(self) -> String {
        let mut text = self.message.unwrap_or_default();
        if !self.fields.is_empty() {
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(&self.fields);
        }
        text
    }

    fn push_field(&mut self, name: &str, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(self.fields, "{name}={value}");
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => self.message = Some(format!("{value:?}")),
            CORRELATION_FIELD => self.correlation_id = Some(format!("{value:?}")),
            name => self.push_field(name, format_args!("{value:?}")),
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = Some(value.to_owned()),
            CORRELATION_FIELD => self.correlation_id = Some(value.to_owned()),
            name => self.push_field(name, format_args!("{value}")),
        }
    }
}

/// Installs a global tracing subscriber that forwards events into `logger`.
///
/// # Panics
///
/// Panics if a global subscriber is already set.
pub fn init_tracing(logger: Arc<Logger>) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LoggerLayer::new(logger))
        .init();
}

/// Like [`init_tracing`], but reports an already installed subscriber as an error.
///
/// # Errors
///
/// Returns [`TryInitError`] when a global subscriber is already set.
pub fn try_init_tracing(logger: Arc<Logger>) -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LoggerLayer::new(logger))
        .try_init()
}

/// Installs the bridge behind an additional filter layer.
///
/// ```no_run
/// use std::sync::Arc;
/// use svclog::{Logger, init_tracing_with_filter};
/// use tracing_subscriber::EnvFilter;
///
/// init_tracing_with_filter(Arc::new(Logger::builder().build()), EnvFilter::from_default_env());
/// ```
///
/// # Panics
///
/// Panics if a global subscriber is already set.
pub fn init_tracing_with_filter<F>(logger: Arc<Logger>, filter: F)
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(LoggerLayer::new(logger))
        .init();
}
