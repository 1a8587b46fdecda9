//! Process-wide default logger
//!
//! A [`Logger`] built on first use with level `Info`, full-word labels,
//! date and time headers, no prefix, writing to standard error. The free
//! functions here delegate to it and carry the same guarantees as the
//! corresponding methods; emission functions report their caller's location.

use super::{
    error::Result,
    flags::LogFlags,
    label::LevelStringType,
    log_level::LogLevel,
    logger::Logger,
};
use std::fmt;
use std::io::{self, Write};
use std::sync::OnceLock;

static STD_LOGGER: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger, created on first access
pub fn std_logger() -> &'static Logger {
    STD_LOGGER.get_or_init(|| Logger::new(LogLevel::Info, io::stderr(), "", LogFlags::STD_FLAGS))
}

pub fn set_level(level: LogLevel) {
    std_logger().set_level(level);
}

pub fn get_level() -> LogLevel {
    std_logger().level()
}

pub fn set_flags(flags: LogFlags) {
    std_logger().set_flags(flags);
}

pub fn flags() -> LogFlags {
    std_logger().flags()
}

pub fn set_prefix(prefix: impl Into<String>) {
    std_logger().set_prefix(prefix);
}

pub fn prefix() -> String {
    std_logger().prefix()
}

pub fn set_level_string_type(style: LevelStringType) {
    std_logger().set_level_string_type(style);
}

pub fn get_level_string_type() -> LevelStringType {
    std_logger().level_string_type()
}

pub fn set_output<W: Write + Send + 'static>(output: W) {
    std_logger().set_output(output);
}

pub fn add_func<F>(cleanup: F)
where
    F: FnOnce() -> io::Result<()> + Send + 'static,
{
    std_logger().add_func(cleanup);
}

/// Run the default logger's cleanup hooks. The logger stays usable.
pub fn close() -> Result<()> {
    std_logger().close()
}

#[track_caller]
pub fn error(parts: &[&dyn fmt::Display]) -> Result<()> {
    std_logger().error(parts)
}

#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) -> Result<()> {
    std_logger().errorf(args)
}

#[track_caller]
pub fn errorln(parts: &[&dyn fmt::Display]) -> Result<()> {
    std_logger().errorln(parts)
}

#[track_caller]
pub fn info(parts: &[&dyn fmt::Display]) -> Result<()> {
    std_logger().info(parts)
}

#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) -> Result<()> {
    std_logger().infof(args)
}

#[track_caller]
pub fn infoln(parts: &[&dyn fmt::Display]) -> Result<()> {
    std_logger().infoln(parts)
}

#[track_caller]
pub fn debug(parts: &[&dyn fmt::Display]) -> Result<()> {
    std_logger().debug(parts)
}

#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) -> Result<()> {
    std_logger().debugf(args)
}

#[track_caller]
pub fn debugln(parts: &[&dyn fmt::Display]) -> Result<()> {
    std_logger().debugln(parts)
}

#[track_caller]
pub fn print(parts: &[&dyn fmt::Display]) -> Result<()> {
    std_logger().print(parts)
}

#[track_caller]
pub fn printf(args: fmt::Arguments<'_>) -> Result<()> {
    std_logger().printf(args)
}

#[track_caller]
pub fn println(parts: &[&dyn fmt::Display]) -> Result<()> {
    std_logger().println(parts)
}
