//! Basic logger usage example
//!
//! Demonstrates thresholds, label styles and header flags on standard error.
//!
//! Run with: cargo run --example basic_usage

use ezlog::prelude::*;
use ezlog::{debug, errorf, info, infoln};
use std::io;

fn main() -> Result<()> {
    println!("=== ezlog - Basic Usage Example ===\n");

    let logger = Logger::new(LogLevel::Debug, io::stderr(), "", LogFlags::STD_FLAGS);

    println!("1. Logging at different levels:");
    logger.error(&[&"This is an error message"])?;
    info!(logger, "This is an info message, code ", 200)?;
    debug!(logger, "This is a debug message")?;

    println!("\n2. Raising the threshold to info hides debug:");
    logger.set_level(LogLevel::Info);
    debug!(logger, "Debug message (hidden)")?;
    infoln!(logger, "Info", "message", "(visible)")?;

    println!("\n3. Character labels with a prefix and call site:");
    logger.set_level_string_type(LevelStringType::Char);
    logger.set_prefix("[demo] ");
    logger.set_flags(parse_log_flags("time shortfile")?);
    errorf!(logger, "disk {} is {}% full", "/dev/sda1", 97)?;

    println!("\n4. The process-wide logger:");
    ezlog::set_flags(LogFlags::SHORTFILE);
    ezlog::info(&[&"default logger writes to stderr"])?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
