//! Severity label rendering styles

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a message's severity is rendered in front of its body.
///
/// | style   | error   | info   | debug   |
/// |---------|---------|--------|---------|
/// | `Full`  | `ERROR` | `INFO` | `DEBUG` |
/// | `Char`  | `E`     | `I`    | `D`     |
/// | `Short` | `ERR`   | `INF`  | `DBG`   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum LevelStringType {
    #[default]
    #[serde(alias = "word")]
    Full = 0,
    Char = 1,
    Short = 2,
}

impl LevelStringType {
    pub fn to_str(&self) -> &'static str {
        match self {
            LevelStringType::Full => "full",
            LevelStringType::Char => "char",
            LevelStringType::Short => "short",
        }
    }

    #[inline]
    pub(crate) const fn from_u8(value: u8) -> LevelStringType {
        match value {
            1 => LevelStringType::Char,
            2 => LevelStringType::Short,
            _ => LevelStringType::Full,
        }
    }
}

impl fmt::Display for LevelStringType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LevelStringType {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" | "word" => Ok(LevelStringType::Full),
            "char" => Ok(LevelStringType::Char),
            "short" => Ok(LevelStringType::Short),
            _ => Err(LoggerError::unknown_label_style(s)),
        }
    }
}
