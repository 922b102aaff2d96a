//! crates/logging/src/config.rs
//! Logger configuration derived from a verbosity level or a textual toggle.

use std::str::FromStr;

use crate::error::LoggerError;
use crate::global;
use crate::logger::Logger;

/// On/off configuration for the trace logger.
#[derive(Clone, Copy, Default, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoggerConfig {
    /// Whether trace output is produced.
    pub enabled: bool,
}

impl LoggerConfig {
    /// Configuration with tracing turned on.
    #[must_use]
    pub const fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Configuration with tracing turned off.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Maps a `-v` count to a configuration: 0 disables, anything else enables.
    #[must_use]
    pub const fn from_verbose_level(level: u8) -> Self {
        Self {
            enabled: level > 0,
        }
    }

    /// Applies this configuration to the process-wide logger.
    pub fn apply(self) {
        if self.enabled {
            global::enable();
        } else {
            global::disable();
        }
    }

    /// Builds an instance logger over `writer` in this state.
    #[must_use]
    pub fn build<W>(self, writer: W) -> Logger<W> {
        if self.enabled {
            Logger::enabled_with(writer)
        } else {
            Logger::new(writer)
        }
    }
}

impl FromStr for LoggerConfig {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const ON: [&str; 4] = ["1", "true", "yes", "on"];
        const OFF: [&str; 4] = ["0", "false", "no", "off"];

        let token = s.trim();

        if ON.iter().any(|candidate| token.eq_ignore_ascii_case(candidate)) {
            Ok(Self::enabled())
        } else if OFF.iter().any(|candidate| token.eq_ignore_ascii_case(candidate)) {
            Ok(Self::disabled())
        } else {
            Err(LoggerError::InvalidToggle(s.to_owned()))
        }
    }
}

impl From<bool> for LoggerConfig {
    fn from(enabled: bool) -> Self {
        Self { enabled }
    }
}
