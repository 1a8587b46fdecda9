//! # ezlog
//!
//! A leveled logging facade over any line-oriented writer.
//!
//! ## Features
//!
//! - **Severity gating**: `none < error < info < debug` thresholds, changeable at runtime
//! - **Line headers**: custom prefix, date, time, microseconds, UTC, `file:line`
//! - **Label styles**: `ERROR:`, `E:` or `ERR:` in front of each message
//! - **Thread safe**: every setting is independently atomic; one write per line
//! - **Default logger**: process-wide instance behind free functions
//!
//! ```
//! use ezlog::prelude::*;
//!
//! let buffer = SharedBuffer::default();
//! let logger = Logger::new(LogLevel::Info, buffer.clone(), "", LogFlags::NONE);
//!
//! ezlog::info!(logger, "listening on ", 8080).unwrap();
//! ezlog::debugf!(logger, "hidden {}", 1).unwrap();
//!
//! assert_eq!(buffer.contents(), "INFO: listening on 8080\n");
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        level_by_name, parse_log_flags, std_logger, LevelStringType, LogFlags, LogLevel, Logger,
        LoggerBuilder, LoggerConfig, LoggerError, Result,
    };
    pub use crate::sinks::{SharedBuffer, SharedWriter};
}

pub use crate::core::global::{
    add_func, close, debug, debugf, debugln, error, errorf, errorln, flags, get_level,
    get_level_string_type, info, infof, infoln, prefix, print, printf, println, set_flags,
    set_level, set_level_string_type, set_output, set_prefix,
};
pub use crate::core::{
    level_by_name, parse_log_flags, std_logger, CleanupFn, LevelStringType, LogFlags, LogLevel,
    Logger, LoggerBuilder, LoggerConfig, LoggerError, Result,
};
pub use sinks::{SharedBuffer, SharedWriter};
