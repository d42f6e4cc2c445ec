//! crates/svclog/src/config.rs
//! Startup configuration read once from the environment.

use std::env;
use std::io;

use is_terminal::IsTerminal;
use svclog_sink::LineMode;

use crate::level::{INVALID_LEVEL, Level, level_value};

/// Environment variable naming the remote log endpoint.
pub const REMOTE_ENV: &str = "LOG_REMOTE";
/// Environment variable holding the console threshold name.
pub const CONSOLE_LEVEL_ENV: &str = "LOG_CONSOLE_LEVEL";
/// Environment variable holding the remote threshold name.
pub const REMOTE_LEVEL_ENV: &str = "LOG_REMOTE_LEVEL";

/// Settings a [`Logger`](crate::Logger) is built from.
///
/// Missing or unrecognised level names fall back to INFO. The remote endpoint
/// is recorded but no remote delivery takes place.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoggerConfig {
    /// Remote endpoint address, if configured.
    pub remote: Option<String>,
    /// Console threshold.
    pub console_level: i32,
    /// Remote threshold.
    pub remote_level: i32,
    /// Whether console lines carry ANSI colours.
    pub color: bool,
    /// Line termination applied by the console sink.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub line_mode: LineMode,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            remote: None,
            console_level: Level::Info.value(),
            remote_level: Level::Info.value(),
            color: false,
            line_mode: LineMode::WithNewline,
        }
    }
}

impl LoggerConfig {
    /// Reads [`REMOTE_ENV`], [`CONSOLE_LEVEL_ENV`], and [`REMOTE_LEVEL_ENV`].
    ///
    /// Colour is enabled when standard error is a terminal.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::from_lookup(|key| env::var(key).ok());
        config.color = io::stderr().is_terminal();
        config
    }

    /// Builds a configuration from an arbitrary key lookup.
    ///
    /// ```
    /// use svclog::LoggerConfig;
    ///
    /// let config = LoggerConfig::from_lookup(|key| match key {
    ///     "LOG_CONSOLE_LEVEL" => Some("DEBUG".to_owned()),
    ///     "LOG_REMOTE_LEVEL" => Some("noisy".to_owned()),
    ///     _ => None,
    /// });
    /// assert_eq!(config.console_level, 4);
    /// assert_eq!(config.remote_level, 3);
    /// assert_eq!(config.remote, None);
    /// ```
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            remote: lookup(REMOTE_ENV).filter(|endpoint| !endpoint.is_empty()),
            console_level: resolve_level(CONSOLE_LEVEL_ENV, lookup(CONSOLE_LEVEL_ENV)),
            remote_level: resolve_level(REMOTE_LEVEL_ENV, lookup(REMOTE_LEVEL_ENV)),
            ..Self::default()
        }
    }
}

fn resolve_level(variable: &str, name: Option<String>) -> i32 {
    let Some(name) = name else {
        return Level::Info.value();
    };

    match level_value(&name) {
        INVALID_LEVEL => {
            tracing::debug!(
                target: "svclog::config",
                variable,
                value = %name,
                "unrecognised level name, using INFO"
            );
            Level::Info.value()
        }
        value => value,
    }
}
