//! Logging macros for the three call shapes.
//!
//! * `error!(logger, a, b, ...)` concatenates the `Display` forms of its
//!   arguments with no separator.
//! * `errorln!(logger, a, b, ...)` joins them with single spaces.
//! * `errorf!(logger, "fmt", args...)` formats like `format!`.
//!
//! The same shapes exist for `info` and `debug`, and `logprint!`,
//! `logprintln!` and `logprintf!` cover the unlabelled print family. Every
//! macro evaluates to the `Result` of the underlying call and reports the
//! line of the macro invocation in `file:line` headers.
//!
//! # Examples
//!
//! ```
//! use ezlog::prelude::*;
//! use ezlog::{info, infof, infoln};
//!
//! let buffer = SharedBuffer::default();
//! let logger = Logger::new(LogLevel::Info, buffer.clone(), "", LogFlags::NONE);
//!
//! info!(logger, "a", "b", "c").unwrap();
//! infoln!(logger, "a", "b", "c").unwrap();
//! infof!(logger, "{}-{}", 1, 2).unwrap();
//!
//! assert_eq!(buffer.contents(), "INFO: abc\nINFO: a b c\nINFO: 1-2\n");
//! ```

/// Expand a list of expressions into a `&[&dyn Display]` slice.
#[doc(hidden)]
#[macro_export]
macro_rules! __display_parts {
    ($($arg:expr),* $(,)?) => {
        &[$(&$arg as &dyn ::std::fmt::Display),*]
    };
}

/// Log error-level arguments concatenated verbatim.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.error($crate::__display_parts!($($arg),+))
    };
}

/// Log a formatted error-level message.
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(::std::format_args!($($arg)+))
    };
}

/// Log error-level arguments separated by spaces.
#[macro_export]
macro_rules! errorln {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.errorln($crate::__display_parts!($($arg),+))
    };
}

/// Log info-level arguments concatenated verbatim.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.info($crate::__display_parts!($($arg),+))
    };
}

/// Log a formatted info-level message.
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(::std::format_args!($($arg)+))
    };
}

/// Log info-level arguments separated by spaces.
#[macro_export]
macro_rules! infoln {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.infoln($crate::__display_parts!($($arg),+))
    };
}

/// Log debug-level arguments concatenated verbatim.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.debug($crate::__display_parts!($($arg),+))
    };
}

/// Log a formatted debug-level message.
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(::std::format_args!($($arg)+))
    };
}

/// Log debug-level arguments separated by spaces.
#[macro_export]
macro_rules! debugln {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.debugln($crate::__display_parts!($($arg),+))
    };
}

/// Write arguments concatenated verbatim, without a severity label.
#[macro_export]
macro_rules! logprint {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.print($crate::__display_parts!($($arg),+))
    };
}

/// Write a formatted message without a severity label.
#[macro_export]
macro_rules! logprintf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.printf(::std::format_args!($($arg)+))
    };
}

/// Write arguments separated by spaces, without a severity label.
#[macro_export]
macro_rules! logprintln {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.println($crate::__display_parts!($($arg),+))
    };
}
