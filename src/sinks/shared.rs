//! Cloneable writer handles

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// A writer shared between the logger and the rest of the program.
///
/// Clones point at the same underlying writer. Each `write` call holds the
/// lock for its whole duration, so lines from concurrent loggers sharing one
/// `SharedWriter` never interleave.
///
/// # Example
///
/// ```
/// use ezlog::prelude::*;
/// use std::io::{BufWriter, Write};
///
/// let buffer = SharedBuffer::default();
/// let writer = SharedWriter::new(BufWriter::new(buffer.clone()));
/// let flusher = writer.clone();
///
/// let logger = Logger::new(LogLevel::Error, writer, "", LogFlags::NONE);
/// logger.add_func(move || flusher.with(|w| w.flush()));
///
/// logger.error(&[&"oh no!"]).unwrap();
/// assert!(buffer.is_empty());
///
/// logger.close().unwrap();
/// assert_eq!(buffer.contents(), "ERROR: oh no!\n");
/// ```
#[derive(Debug, Default)]
pub struct SharedWriter<W> {
    inner: Arc<Mutex<W>>,
}

impl<W> SharedWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: Arc::new(Mutex::new(writer)),
        }
    }

    /// Run `f` with exclusive access to the wrapped writer
    pub fn with<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl<W> Clone for SharedWriter<W> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<W: Write> Write for SharedWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.lock().flush()
    }
}

/// In-memory destination, mostly for capturing output in tests
pub type SharedBuffer = SharedWriter<Vec<u8>>;

impl SharedWriter<Vec<u8>> {
    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock()).into_owned()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}
