//! crates/svclog/src/context.rs
//! Caller context passed to every entry point.

/// Per-call context carrying request-scoped data into log records.
///
/// ```
/// use svclog::Context;
///
/// let ctx = Context::with_correlation_id("req-42");
/// assert_eq!(ctx.correlation_id(), Some("req-42"));
/// assert_eq!(Context::background().correlation_id(), None);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Context {
    correlation_id: Option<String>,
}

impl Context {
    /// Context with no request-scoped data.
    #[must_use]
    pub const fn background() -> Self {
        Self {
            correlation_id: None,
        }
    }

    /// Context tagged with a correlation id.
    #[must_use]
    pub fn with_correlation_id(id: impl Into<String>) -> Self {
        Self {
            correlation_id: Some(id.into()),
        }
    }

    /// The correlation id, if one was attached.
    #[must_use]
    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }
}
