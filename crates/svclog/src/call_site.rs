//! crates/svclog/src/call_site.rs
//! Call-site capture and position rendering.
//!
//! Call sites are captured once, at the public entry point the application
//! called, and then passed down explicitly. Entry-point methods are
//! `#[track_caller]`, so [`CallSite::caller`] resolves to the application's
//! line no matter how many internal frames sit in between. The logging macros
//! go one step further and also record the enclosing function name.

use std::fmt;
use std::panic::Location;

/// Position text used when no call site is available.
pub const UNKNOWN_CALLER: &str = "Unknown caller -";

/// Source position of a log call.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct CallSite {
    file: &'static str,
    line: u32,
    function: Option<&'static str>,
}

impl CallSite {
    /// Creates a call site from its parts.
    #[must_use]
    pub const fn new(file: &'static str, line: u32, function: Option<&'static str>) -> Self {
        Self {
            file,
            line,
            function,
        }
    }

    /// Captures the location of the caller.
    ///
    /// Inside a `#[track_caller]` function this is the location of that
    /// function's caller.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        Self::from_location(Location::caller())
    }

    /// Converts a [`Location`] into a call site with no function name.
    #[must_use]
    pub const fn from_location(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line(), None)
    }

    /// Source file of the call.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Line of the call.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Name of the calling function, when known.
    #[must_use]
    pub const fn function(&self) -> Option<&'static str> {
        self.function
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)?;
        if let Some(function) = self.function {
            write!(f, " {function}()")?;
        }
        Ok(())
    }
}

/// Renders the position text for an optional call site.
///
/// ```
/// use svclog::{position_text, CallSite, UNKNOWN_CALLER};
///
/// let site = CallSite::new("src/pay.rs", 12, Some("charge"));
/// assert_eq!(position_text(Some(site)), "src/pay.rs:12 charge()");
/// assert_eq!(position_text(None), UNKNOWN_CALLER);
/// ```
#[must_use]
pub fn position_text(site: Option<CallSite>) -> String {
    site.map_or_else(|| UNKNOWN_CALLER.to_owned(), |site| site.to_string())
}

/// Reduces a type path produced by [`__function_path!`](crate::__function_path)
/// to the bare name of the enclosing function.
#[doc(hidden)]
#[must_use]
pub fn short_function_name(path: &'static str) -> &'static str {
    let mut path = path.strip_suffix("::__here").unwrap_or(path);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    path.rsplit("::").next().unwrap_or(path)
}

#[doc(hidden)]
#[macro_export]
macro_rules! __function_path {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        __type_name_of(__here)
    }};
}

/// Captures the current file, line, and enclosing function as a [`CallSite`].
///
/// ```
/// fn charge() -> svclog::CallSite {
///     svclog::call_site!()
/// }
///
/// assert_eq!(charge().function(), Some("charge"));
/// ```
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(
            ::core::file!(),
            ::core::line!(),
            ::core::option::Option::Some($crate::call_site::short_function_name(
                $crate::__function_path!(),
            )),
        )
    };
}
