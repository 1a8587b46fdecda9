//! Header flags controlling what precedes each log line

use super::error::{LoggerError, Result};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

/// Bit set of header options.
///
/// The bit values follow the conventional `date=1, time=2, microseconds=4,
/// longfile=8, shortfile=16, utc=32` layout so numeric flag values read
/// from configuration keep their usual meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LogFlags(u32);

impl LogFlags {
    /// No header segments
    pub const NONE: LogFlags = LogFlags(0);
    /// `YYYY/MM/DD`
    pub const DATE: LogFlags = LogFlags(1);
    /// `HH:MM:SS`
    pub const TIME: LogFlags = LogFlags(1 << 1);
    /// `HH:MM:SS.ffffff`, forces the time segment
    pub const MICROSECONDS: LogFlags = LogFlags(1 << 2);
    /// Full source path and line
    pub const LONGFILE: LogFlags = LogFlags(1 << 3);
    /// Final path component and line, overrides `LONGFILE`
    pub const SHORTFILE: LogFlags = LogFlags(1 << 4);
    /// Render date and time in UTC instead of the local zone
    pub const UTC: LogFlags = LogFlags(1 << 5);
    /// Date and time
    pub const STD_FLAGS: LogFlags = LogFlags(Self::DATE.0 | Self::TIME.0);

    const ALL_BITS: u32 = 0b11_1111;

    const NAMED: [(&'static str, LogFlags); 6] = [
        ("date", Self::DATE),
        ("time", Self::TIME),
        ("microseconds", Self::MICROSECONDS),
        ("longfile", Self::LONGFILE),
        ("shortfile", Self::SHORTFILE),
        ("utc", Self::UTC),
    ];

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Build flags from raw bits, dropping any bit without a meaning
    #[inline]
    pub const fn from_bits_truncate(bits: u32) -> LogFlags {
        LogFlags(bits & Self::ALL_BITS)
    }

    #[inline]
    pub const fn contains(self, other: LogFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether any bit of `other` is set
    #[inline]
    pub const fn intersects(self, other: LogFlags) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn union(self, other: LogFlags) -> LogFlags {
        LogFlags(self.0 | other.0)
    }
}

impl BitOr for LogFlags {
    type Output = LogFlags;

    fn bitor(self, rhs: LogFlags) -> LogFlags {
        self.union(rhs)
    }
}

impl BitOrAssign for LogFlags {
    fn bitor_assign(&mut self, rhs: LogFlags) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for LogFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let mut first = true;
        for (name, flag) in Self::NAMED {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl FromStr for LogFlags {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        parse_log_flags(s)
    }
}

/// Resolve one flag name, with or without its leading `l` marker.
fn parse_flag_token(token: &str) -> Result<LogFlags> {
    let flag = match token.to_ascii_lowercase().as_str() {
        "none" => LogFlags::NONE,
        "date" | "ldate" => LogFlags::DATE,
        "time" | "ltime" => LogFlags::TIME,
        "microseconds" | "lmicroseconds" => LogFlags::MICROSECONDS,
        "longfile" | "llongfile" => LogFlags::LONGFILE,
        "shortfile" | "lshortfile" => LogFlags::SHORTFILE,
        "utc" | "lutc" => LogFlags::UTC,
        "stdflags" | "lstdflags" => LogFlags::STD_FLAGS,
        _ => return Err(LoggerError::unknown_flag(token)),
    };
    Ok(flag)
}

/// Parse a list of flag names separated by whitespace, `,` or `|` into their union.
///
/// Names are case-insensitive and may carry a leading `l` (`Ldate`, `LUTC`).
/// `none` contributes nothing. An input with no names at all, or any name that
/// is not recognized, fails with [`LoggerError::UnknownFlag`] carrying the
/// offending token exactly as written.
pub fn parse_log_flags(names: &str) -> Result<LogFlags> {
    let mut tokens = names
        .split(|c: char| c.is_whitespace() || c == ',' || c == '|')
        .filter(|token| !token.is_empty())
        .peekable();

    if tokens.peek().is_none() {
        return Err(LoggerError::unknown_flag(""));
    }

    tokens.try_fold(LogFlags::NONE, |acc, token| -> Result<LogFlags> {
        Ok(acc | parse_flag_token(token)?)
    })
}
