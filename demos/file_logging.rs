//! File logging example
//!
//! Demonstrates a buffered file destination flushed by a cleanup hook.
//!
//! Run with: cargo run --example file_logging

use ezlog::prelude::*;
use ezlog::{infof, logprintln};

fn main() -> Result<()> {
    println!("=== ezlog - File Logging Example ===\n");

    let config = LoggerConfig::from_env()?;
    let logger = config.build(std::io::sink())?;
    logger.set_output_file("application.log")?;

    logger.info(&[&"Application started"])?;
    logger.debug(&[&"Loading configuration..."])?;
    for i in 1..=5 {
        infof!(logger, "Processing item {}/5", i)?;
    }
    logprintln!(logger, "All", "operations", "completed")?;

    // Runs the flush hook registered by set_output_file
    logger.close()?;

    println!("Check 'application.log' for the full log output");

    Ok(())
}
