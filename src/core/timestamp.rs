//! Date and time segment of the line header
//!
//! Renders `YYYY/MM/DD ` and `HH:MM:SS ` (or `HH:MM:SS.ffffff ` with
//! microseconds) in the local zone, or in UTC when [`LogFlags::UTC`] is set.

use super::flags::LogFlags;
use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::Display;

const DATE_FORMAT: &str = "%Y/%m/%d ";
const TIME_FORMAT: &str = "%H:%M:%S ";
const MICROS_FORMAT: &str = "%H:%M:%S%.6f ";

/// Whether `flags` asks for any date or time output
#[inline]
pub fn wants_timestamp(flags: LogFlags) -> bool {
    flags.intersects(LogFlags::DATE | LogFlags::TIME | LogFlags::MICROSECONDS)
}

/// Append the date/time segment selected by `flags` for the instant `now`.
///
/// Nothing is written unless one of date, time or microseconds is set.
/// Microseconds imply the time segment.
pub fn write_timestamp(buf: &mut String, flags: LogFlags, now: &DateTime<Utc>) {
    if !wants_timestamp(flags) {
        return;
    }
    if flags.contains(LogFlags::UTC) {
        render(buf, flags, now);
    } else {
        render(buf, flags, &now.with_timezone(&Local));
    }
}

fn render<Tz>(buf: &mut String, flags: LogFlags, datetime: &DateTime<Tz>)
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if flags.contains(LogFlags::DATE) {
        buf.push_str(&datetime.format(DATE_FORMAT).to_string());
    }
    if flags.contains(LogFlags::MICROSECONDS) {
        buf.push_str(&datetime.format(MICROS_FORMAT).to_string());
    } else if flags.contains(LogFlags::TIME) {
        buf.push_str(&datetime.format(TIME_FORMAT).to_string());
    }
}
