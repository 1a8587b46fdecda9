//! Declarative logger configuration
//!
//! [`LoggerConfig`] holds the settable fields of a [`Logger`] in a form that
//! can come from JSON or environment variables:
//!
//! | field         | env var        | default    |
//! |---------------|----------------|------------|
//! | `level`       | `EZLOG_LEVEL`  | `info`     |
//! | `label_style` | `EZLOG_LABEL`  | `full`     |
//! | `flags`       | `EZLOG_FLAGS`  | `stdflags` |
//! | `prefix`      | `EZLOG_PREFIX` | empty      |

use super::{
    error::{LoggerError, Result},
    flags::{parse_log_flags, LogFlags},
    label::LevelStringType,
    log_level::LogLevel,
    logger::Logger,
};
use serde::{Deserialize, Serialize};
use std::io::Write;

pub const ENV_LEVEL: &str = "EZLOG_LEVEL";
pub const ENV_LABEL: &str = "EZLOG_LABEL";
pub const ENV_FLAGS: &str = "EZLOG_FLAGS";
pub const ENV_PREFIX: &str = "EZLOG_PREFIX";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub label_style: LevelStringType,
    /// Flag names as accepted by [`parse_log_flags`]
    pub flags: String,
    pub prefix: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            label_style: LevelStringType::Full,
            flags: "stdflags".to_string(),
            prefix: String::new(),
        }
    }
}

impl LoggerConfig {
    /// Parse from JSON; missing fields keep their defaults
    ///
    /// ```
    /// use ezlog::{LoggerConfig, LogLevel, LogFlags};
    ///
    /// let config = LoggerConfig::from_json(r#"{"level": "debug", "flags": "time shortfile"}"#).unwrap();
    /// assert_eq!(config.level, LogLevel::Debug);
    /// assert_eq!(config.parsed_flags().unwrap(), LogFlags::TIME | LogFlags::SHORTFILE);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LoggerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read overrides from the `EZLOG_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with a caller-supplied variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(level) = lookup(ENV_LEVEL) {
            config.level = level.parse()?;
        }
        if let Some(style) = lookup(ENV_LABEL) {
            config.label_style = style.parse()?;
        }
        if let Some(flags) = lookup(ENV_FLAGS) {
            config.flags = flags;
        }
        if let Some(prefix) = lookup(ENV_PREFIX) {
            config.prefix = prefix;
        }
        config.validate()?;
        Ok(config)
    }

    /// Capture the current settings of `logger`
    pub fn from_logger(logger: &Logger) -> Self {
        Self {
            level: logger.level(),
            label_style: logger.level_string_type(),
            flags: logger.flags().to_string(),
            prefix: logger.prefix(),
        }
    }

    pub fn parsed_flags(&self) -> Result<LogFlags> {
        parse_log_flags(&self.flags)
    }

    fn validate(&self) -> Result<()> {
        self.parsed_flags()
            .map(|_| ())
            .map_err(|e| LoggerError::config("LoggerConfig.flags", e.to_string()))
    }

    /// Build a logger writing to `output`
    pub fn build<W: Write + Send + 'static>(&self, output: W) -> Result<Logger> {
        let flags = self.parsed_flags()?;
        Ok(Logger::builder()
            .level(self.level)
            .label_style(self.label_style)
            .flags(flags)
            .prefix(self.prefix.clone())
            .output(output)
            .build())
    }

    /// Apply every field to an existing logger.
    ///
    /// Flags are parsed first; on error the logger is left untouched.
    pub fn apply(&self, logger: &Logger) -> Result<()> {
        let flags = self.parsed_flags()?;
        logger.set_level(self.level);
        logger.set_level_string_type(self.label_style);
        logger.set_flags(flags);
        logger.set_prefix(self.prefix.clone());
        Ok(())
    }
}
