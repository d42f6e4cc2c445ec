//! crates/svclog/src/macros.rs
//! Format-string logging macros.
//!
//! The macros check the gate before formatting anything and record the file,
//! line, and enclosing function of the invocation. Each takes the logger (any
//! expression that dereferences to [`Logger`](crate::Logger)), the
//! [`Context`](crate::Context), and `format!`-style arguments.

/// Logs at an explicit [`Level`](crate::Level).
///
/// ```
/// use svclog::{Context, Level, Logger, SharedBuffer, log_at};
///
/// let out = SharedBuffer::new();
/// let logger = Logger::builder().console_level(Level::Debug).standard(out.clone()).build();
///
/// log_at!(logger, Context::background(), Level::Debug, "{} rows", 3);
/// assert!(out.contents_lossy().ends_with("DEBUG || 3 rows\n"));
/// ```
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $ctx:expr, $level:expr, $($arg:tt)+) => {{
        let logger: &$crate::Logger = &$logger;
        let level: $crate::Level = $level;
        if logger.enabled(level) {
            logger.log_at(
                &$ctx,
                level,
                ::core::option::Option::Some($crate::call_site!()),
                ::std::fmt::format(::core::format_args!($($arg)+)),
            );
        }
    }};
}

/// Logs at INFO.
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $ctx, $crate::Level::Info, $($arg)+)
    };
}

/// Logs at DEBUG.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $ctx, $crate::Level::Debug, $($arg)+)
    };
}

/// Logs at TRACE.
#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $ctx, $crate::Level::Trace, $($arg)+)
    };
}

/// Logs at ERROR and evaluates to the message as a
/// [`LoggedError`](crate::LoggedError).
///
/// The message is always formatted, since the error is returned even when the
/// line is suppressed.
///
/// ```
/// use svclog::{Context, Logger, SharedBuffer, log_error};
///
/// let logger = Logger::builder().error(SharedBuffer::new()).build();
/// let err = log_error!(logger, Context::background(), "lookup of {} failed", "id-7");
/// assert_eq!(err.message(), "lookup of id-7 failed");
/// ```
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {{
        let logger: &$crate::Logger = &$logger;
        logger.error_at(
            &$ctx,
            ::core::option::Option::Some($crate::call_site!()),
            ::std::fmt::format(::core::format_args!($($arg)+)),
        )
    }};
}

/// Logs at PANIC, then panics with the formatted message.
#[macro_export]
macro_rules! log_panic {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {{
        let logger: &$crate::Logger = &$logger;
        logger.panic_at(
            &$ctx,
            ::core::option::Option::Some($crate::call_site!()),
            ::std::fmt::format(::core::format_args!($($arg)+)),
        )
    }};
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use svclog_sink::SharedBuffer;

    use crate::{Context, Level, Logger};

    fn logger_with(console: Level) -> (Arc<Logger>, SharedBuffer, SharedBuffer) {
        let standard = SharedBuffer::new();
        let error = SharedBuffer::new();
        let logger = Logger::builder()
            .console_level(console)
            .standard(standard.clone())
            .error(error.clone())
            .build();
        (Arc::new(logger), standard, error)
    }

    #[test]
    fn info_macro_names_enclosing_function() {
        let (logger, standard, _) = logger_with(Level::Info);
        let ctx = Context::background();
        crate::log_info!(logger, ctx, "started {}", 1);

        let output = standard.contents_lossy();
        assert!(output.contains(" info_macro_names_enclosing_function() - INFO || started 1\n"));
        assert!(output.contains("macros.rs:"));
    }

    #[test]
    fn gated_macro_does_not_evaluate_arguments() {
        struct Exploding;
        impl std::fmt::Display for Exploding {
            fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                panic!("formatted while gated off");
            }
        }

        let (logger, standard, _) = logger_with(Level::Info);
        crate::log_trace!(logger, Context::background(), "{}", Exploding);
        assert!(standard.is_empty());
    }

    #[test]
    fn error_macro_returns_value_and_writes_error_stream() {
        let (logger, standard, error) = logger_with(Level::Info);
        let err = crate::log_error!(&*logger, Context::with_correlation_id("c-1"), "bad {}", "input");

        assert_eq!(err.message(), "bad input");
        assert!(error.contents_lossy().contains(" - c-1 - "));
        assert!(standard.is_empty());
    }

    #[test]
    #[should_panic(expected = "halt 3")]
    fn panic_macro_diverges() {
        let (logger, _, _) = logger_with(Level::Off);
        crate::log_panic!(logger, Context::background(), "halt {}", 3);
    }
}
