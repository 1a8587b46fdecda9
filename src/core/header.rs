//! Line header assembly: custom prefix, date/time and call site

use super::flags::LogFlags;
use super::timestamp::write_timestamp;
use chrono::{DateTime, Utc};
use std::panic::Location;

/// Append the header for one log line to `buf`.
///
/// Layout is `prefix`, then the date/time segment, then `file:line: ` when a
/// file flag is set. The prefix is written verbatim with no separator.
pub fn format_header(
    buf: &mut String,
    prefix: &str,
    flags: LogFlags,
    now: &DateTime<Utc>,
    location: &Location<'_>,
) {
    buf.push_str(prefix);
    write_timestamp(buf, flags, now);

    if flags.intersects(LogFlags::SHORTFILE | LogFlags::LONGFILE) {
        let file = if flags.contains(LogFlags::SHORTFILE) {
            short_file(location.file())
        } else {
            location.file()
        };
        buf.push_str(file);
        buf.push(':');
        buf.push_str(&location.line().to_string());
        buf.push_str(": ");
    }
}

/// Final path component, accepting either separator
pub fn short_file(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
