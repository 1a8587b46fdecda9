//! Main logger implementation

use super::{
    error::{LoggerError, Result},
    flags::LogFlags,
    header::format_header,
    label::LevelStringType,
    log_level::LogLevel,
};
use chrono::Utc;
use parking_lot::{Mutex, RwLock};
use std::fmt::{self, Write as _};
use std::io::{self, Write};
use std::panic::Location;
use std::sync::atomic::{AtomicU32, AtomicU8, Ordering};

/// A hook run once when the logger is closed, typically a flush
pub type CleanupFn = Box<dyn FnOnce() -> io::Result<()> + Send>;

/// Leveled logger writing one formatted line per call to a shared destination.
///
/// Every setting can be changed through `&self` at any time and takes effect
/// on the next emission. Each setting is updated atomically on its own; an
/// emission racing with several setters may observe some old and some new
/// values, but never a partially written one.
///
/// Emission methods are `#[track_caller]`, so the `file:line` header segment
/// always names the code that called the logger.
pub struct Logger {
    level: AtomicU8,
    label_style: AtomicU8,
    flags: AtomicU32,
    prefix: RwLock<String>,
    output: Mutex<Box<dyn Write + Send>>,
    cleanups: Mutex<Vec<CleanupFn>>,
}

/// How the arguments of a call become the message body
enum Body<'a> {
    /// Concatenate with no separator
    Concat(&'a [&'a dyn fmt::Display]),
    /// Join with single spaces
    Spaced(&'a [&'a dyn fmt::Display]),
    Format(fmt::Arguments<'a>),
}

impl Body<'_> {
    /// Fails only when a caller's `Display` impl reports an error.
    fn write_to(&self, buf: &mut String) -> fmt::Result {
        match self {
            Body::Concat(parts) => {
                for part in parts.iter() {
                    write!(buf, "{}", part)?;
                }
            }
            Body::Spaced(parts) => {
                for (idx, part) in parts.iter().enumerate() {
                    if idx > 0 {
                        buf.push(' ');
                    }
                    write!(buf, "{}", part)?;
                }
            }
            Body::Format(args) => buf.write_fmt(*args)?,
        }
        Ok(())
    }
}

impl Logger {
    /// Create a logger with the full-word label style.
    pub fn new<W>(level: LogLevel, output: W, prefix: impl Into<String>, flags: LogFlags) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::from_parts(
            level,
            LevelStringType::Full,
            Box::new(output),
            prefix.into(),
            flags,
            Vec::new(),
        )
    }

    pub(crate) fn from_parts(
        level: LogLevel,
        label_style: LevelStringType,
        output: Box<dyn Write + Send>,
        prefix: String,
        flags: LogFlags,
        cleanups: Vec<CleanupFn>,
    ) -> Self {
        Self {
            level: AtomicU8::new(level as u8),
            label_style: AtomicU8::new(label_style as u8),
            flags: AtomicU32::new(flags.bits()),
            prefix: RwLock::new(prefix),
            output: Mutex::new(output),
            cleanups: Mutex::new(cleanups),
        }
    }

    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::Release);
    }

    /// Current severity threshold
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::Acquire))
    }

    pub fn set_flags(&self, flags: LogFlags) {
        self.flags.store(flags.bits(), Ordering::Release);
    }

    pub fn flags(&self) -> LogFlags {
        LogFlags::from_bits_truncate(self.flags.load(Ordering::Acquire))
    }

    pub fn set_prefix(&self, prefix: impl Into<String>) {
        *self.prefix.write() = prefix.into();
    }

    pub fn prefix(&self) -> String {
        self.prefix.read().clone()
    }

    pub fn set_level_string_type(&self, style: LevelStringType) {
        self.label_style.store(style as u8, Ordering::Release);
    }

    pub fn level_string_type(&self) -> LevelStringType {
        LevelStringType::from_u8(self.label_style.load(Ordering::Acquire))
    }

    /// Replace the destination. The previous writer is dropped, not flushed
    /// or closed by the logger.
    pub fn set_output<W>(&self, output: W)
    where
        W: Write + Send + 'static,
    {
        *self.output.lock() = Box::new(output);
    }

    /// Register a hook to run on [`close`](Self::close), after any already registered
    pub fn add_func<F>(&self, cleanup: F)
    where
        F: FnOnce() -> io::Result<()> + Send + 'static,
    {
        self.cleanups.lock().push(Box::new(cleanup));
    }

    /// Run every registered cleanup hook in registration order.
    ///
    /// All hooks run even if some fail; the first failure is returned. Hooks
    /// run at most once, so a second close (or the drop that follows) does
    /// nothing unless new hooks were added. The destination is not closed.
    pub fn close(&self) -> Result<()> {
        let hooks = std::mem::take(&mut *self.cleanups.lock());

        let mut first_error = None;
        for (index, hook) in hooks.into_iter().enumerate() {
            if let Err(e) = hook() {
                if first_error.is_none() {
                    first_error = Some(LoggerError::cleanup(index, e));
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Flush the destination
    pub fn flush(&self) -> Result<()> {
        self.output.lock().flush()?;
        Ok(())
    }

    /// Whether a message of `severity` would currently be written
    #[inline]
    pub fn enabled(&self, severity: LogLevel) -> bool {
        self.level().enables(severity)
    }

    #[track_caller]
    #[inline]
    pub fn error(&self, parts: &[&dyn fmt::Display]) -> Result<()> {
        self.emit(Some(LogLevel::Error), Body::Concat(parts))
    }

    #[track_caller]
    #[inline]
    pub fn errorf(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.emit(Some(LogLevel::Error), Body::Format(args))
    }

    #[track_caller]
    #[inline]
    pub fn errorln(&self, parts: &[&dyn fmt::Display]) -> Result<()> {
        self.emit(Some(LogLevel::Error), Body::Spaced(parts))
    }

    #[track_caller]
    #[inline]
    pub fn info(&self, parts: &[&dyn fmt::Display]) -> Result<()> {
        self.emit(Some(LogLevel::Info), Body::Concat(parts))
    }

    #[track_caller]
    #[inline]
    pub fn infof(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.emit(Some(LogLevel::Info), Body::Format(args))
    }

    #[track_caller]
    #[inline]
    pub fn infoln(&self, parts: &[&dyn fmt::Display]) -> Result<()> {
        self.emit(Some(LogLevel::Info), Body::Spaced(parts))
    }

    #[track_caller]
    #[inline]
    pub fn debug(&self, parts: &[&dyn fmt::Display]) -> Result<()> {
        self.emit(Some(LogLevel::Debug), Body::Concat(parts))
    }

    #[track_caller]
    #[inline]
    pub fn debugf(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.emit(Some(LogLevel::Debug), Body::Format(args))
    }

    #[track_caller]
    #[inline]
    pub fn debugln(&self, parts: &[&dyn fmt::Display]) -> Result<()> {
        self.emit(Some(LogLevel::Debug), Body::Spaced(parts))
    }

    /// Write without a severity label. Only a `None` threshold suppresses it.
    #[track_caller]
    #[inline]
    pub fn print(&self, parts: &[&dyn fmt::Display]) -> Result<()> {
        self.emit(None, Body::Concat(parts))
    }

    #[track_caller]
    #[inline]
    pub fn printf(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.emit(None, Body::Format(args))
    }

    #[track_caller]
    #[inline]
    pub fn println(&self, parts: &[&dyn fmt::Display]) -> Result<()> {
        self.emit(None, Body::Spaced(parts))
    }

    /// Gate, format and write one line. `severity` is `None` for the print family.
    #[track_caller]
    fn emit(&self, severity: Option<LogLevel>, body: Body<'_>) -> Result<()> {
        let threshold = self.level();
        let allowed = match severity {
            Some(severity) => threshold.enables(severity),
            None => threshold != LogLevel::None,
        };
        if !allowed {
            return Ok(());
        }

        let line = self.format_line(severity, &body, Location::caller())?;
        self.write_line(line.as_bytes())
    }

    fn format_line(
        &self,
        severity: Option<LogLevel>,
        body: &Body<'_>,
        location: &Location<'_>,
    ) -> Result<String> {
        let flags = self.flags();
        let now = Utc::now();

        let mut line = String::with_capacity(128);
        format_header(&mut line, &self.prefix.read(), flags, &now, location);

        if let Some(severity) = severity {
            line.push_str(severity.label(self.level_string_type()));
            line.push_str(": ");
        }

        body.write_to(&mut line).map_err(|_| {
            LoggerError::formatter("message", "a Display implementation returned an error")
        })?;
        if !line.ends_with('\n') {
            line.push('\n');
        }
        Ok(line)
    }

    /// One write call per line; a short write is reported, never retried.
    fn write_line(&self, line: &[u8]) -> Result<()> {
        let mut output = self.output.lock();
        let written = output.write(line)?;
        if written != line.len() {
            return Err(LoggerError::short_write(written, line.len()));
        }
        Ok(())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("label_style", &self.level_string_type())
            .field("flags", &self.flags())
            .field("prefix", &*self.prefix.read())
            .field("cleanups", &self.cleanups.lock().len())
            .finish_non_exhaustive()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        // Hooks not run by an explicit close still run exactly once
        if let Err(e) = self.close() {
            eprintln!("[LOGGER ERROR] Failed to run cleanup during shutdown: {}", e);
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use ezlog::prelude::*;
///
/// let buffer = SharedBuffer::default();
/// let logger = Logger::builder()
///     .level(LogLevel::Debug)
///     .label_style(LevelStringType::Char)
///     .prefix("svc ")
///     .flags(LogFlags::NONE)
///     .output(buffer.clone())
///     .build();
///
/// logger.debug(&[&"ready"]).unwrap();
/// assert_eq!(buffer.contents(), "svc D: ready\n");
/// ```
pub struct LoggerBuilder {
    level: LogLevel,
    label_style: LevelStringType,
    prefix: String,
    flags: LogFlags,
    output: Option<Box<dyn Write + Send>>,
    cleanups: Vec<CleanupFn>,
}

impl LoggerBuilder {
    /// Create a builder with the defaults of the process-wide logger
    pub fn new() -> Self {
        Self {
            level: LogLevel::Info,
            label_style: LevelStringType::Full,
            prefix: String::new(),
            flags: LogFlags::STD_FLAGS,
            output: None,
            cleanups: Vec::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn label_style(mut self, style: LevelStringType) -> Self {
        self.label_style = style;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn flags(mut self, flags: LogFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Set the destination. Defaults to standard error.
    #[must_use = "builder methods return a new value"]
    pub fn output<W: Write + Send + 'static>(mut self, output: W) -> Self {
        self.output = Some(Box::new(output));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn cleanup<F>(mut self, cleanup: F) -> Self
    where
        F: FnOnce() -> io::Result<()> + Send + 'static,
    {
        self.cleanups.push(Box::new(cleanup));
        self
    }

    pub fn build(self) -> Logger {
        let output = self.output.unwrap_or_else(|| Box::new(io::stderr()));
        Logger::from_parts(
            self.level,
            self.label_style,
            output,
            self.prefix,
            self.flags,
            self.cleanups,
        )
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
