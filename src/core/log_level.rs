//! Log level definitions

use super::error::LoggerError;
use super::label::LevelStringType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity threshold and message severity.
///
/// Ordered from most restrictive to most permissive: a logger configured at
/// `Info` emits `Error` and `Info` messages, `Debug` emits everything and
/// `None` emits nothing at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum LogLevel {
    None = 0,
    Error = 1,
    #[default]
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub const ALL: [LogLevel; 4] = [LogLevel::None, LogLevel::Error, LogLevel::Info, LogLevel::Debug];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::None => "NONE",
            LogLevel::Error => "ERROR",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Label text for this level in the given style, without the `": "` separator
    pub fn label(&self, style: LevelStringType) -> &'static str {
        match (style, self) {
            (LevelStringType::Full, level) => level.to_str(),
            (LevelStringType::Char, LogLevel::None) => "N",
            (LevelStringType::Char, LogLevel::Error) => "E",
            (LevelStringType::Char, LogLevel::Info) => "I",
            (LevelStringType::Char, LogLevel::Debug) => "D",
            (LevelStringType::Short, LogLevel::None) => "NON",
            (LevelStringType::Short, LogLevel::Error) => "ERR",
            (LevelStringType::Short, LogLevel::Info) => "INF",
            (LevelStringType::Short, LogLevel::Debug) => "DBG",
        }
    }

    /// Whether a logger whose threshold is `self` emits a message of `severity`
    #[inline]
    pub fn enables(&self, severity: LogLevel) -> bool {
        severity != LogLevel::None && severity <= *self
    }

    #[inline]
    pub(crate) const fn from_u8(value: u8) -> LogLevel {
        match value {
            0 => LogLevel::None,
            1 => LogLevel::Error,
            3 => LogLevel::Debug,
            _ => LogLevel::Info,
        }
    }
}

/// Look a level up by name, ignoring case.
///
/// Returns `None` for the empty string and for any name other than
/// none/error/info/debug; absence is not an error.
pub fn level_by_name(name: &str) -> Option<LogLevel> {
    LogLevel::ALL
        .into_iter()
        .find(|level| level.to_str().eq_ignore_ascii_case(name))
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        level_by_name(s.trim()).ok_or_else(|| LoggerError::unknown_level(s))
    }
}
