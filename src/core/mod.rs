//! Core logger types

pub mod config;
pub mod error;
pub mod flags;
pub mod global;
pub mod header;
pub mod label;
pub mod log_level;
pub mod logger;
pub mod timestamp;

pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use flags::{parse_log_flags, LogFlags};
pub use global::std_logger;
pub use label::LevelStringType;
pub use log_level::{level_by_name, LogLevel};
pub use logger::{CleanupFn, Logger, LoggerBuilder};
