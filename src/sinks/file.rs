//! File destination

use super::shared::SharedWriter;
use crate::core::{Logger, LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Buffered file writer that can be flushed from a cleanup hook
pub type FileWriter = SharedWriter<BufWriter<File>>;

/// Open `path` for appending, creating it if needed
pub fn open_append(path: impl AsRef<Path>) -> Result<FileWriter> {
    let path = path.as_ref();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            LoggerError::io_operation(
                "opening log file",
                format!("cannot open '{}'", path.display()),
                e,
            )
        })?;
    Ok(SharedWriter::new(BufWriter::new(file)))
}

impl Logger {
    /// Redirect output to an appended, buffered file.
    ///
    /// A flush of the file is registered as a cleanup hook, so buffered lines
    /// reach the disk on [`close`](Logger::close) or drop.
    pub fn set_output_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let writer = open_append(path)?;
        let flusher = writer.clone();
        self.set_output(writer);
        self.add_func(move || flusher.with(|file| file.flush()));
        Ok(())
    }
}
