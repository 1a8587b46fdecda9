//! Integration tests for the leveled logger
//!
//! These tests verify:
//! - Severity gating per threshold
//! - Header assembly with call-site positions
//! - Word, char and short labels with prefixes
//! - Write failures surfaced to the caller
//! - Cleanup hooks on close

use ezlog::prelude::*;
use ezlog::{debug, errorf, info};
use std::io::{self, BufWriter, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn capture(level: LogLevel, flags: LogFlags) -> (Logger, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let logger = Logger::new(level, buffer.clone(), "", flags);
    (logger, buffer)
}

#[test]
fn test_short_file_reports_caller_line() {
    let (logger, buffer) = capture(LogLevel::Debug, LogFlags::SHORTFILE);
    let s = "oh no Mr. Bill!";
    let g = "Gumby!!!";

    let line = line!() + 1;
    logger.error(&[&s]).unwrap();
    assert_eq!(buffer.contents(), format!("integration_tests.rs:{}: ERROR: {}\n", line, s));
    buffer.clear();

    let line = line!() + 1;
    logger.errorf(format_args!("{} {}", s, g)).unwrap();
    assert_eq!(buffer.contents(), format!("integration_tests.rs:{}: ERROR: {} {}\n", line, s, g));
    buffer.clear();

    let line = line!() + 1;
    logger.infoln(&[&s]).unwrap();
    assert_eq!(buffer.contents(), format!("integration_tests.rs:{}: INFO: {}\n", line, s));
    buffer.clear();

    let line = line!() + 1;
    logger.debug(&[&s]).unwrap();
    assert_eq!(buffer.contents(), format!("integration_tests.rs:{}: DEBUG: {}\n", line, s));
    buffer.clear();

    let line = line!() + 1;
    logger.print(&[&s]).unwrap();
    assert_eq!(buffer.contents(), format!("integration_tests.rs:{}: {}\n", line, s));
}

#[track_caller]
fn log_through_helper(logger: &Logger) {
    logger.info(&[&"from helper"]).unwrap();
}

#[test]
fn test_track_caller_helpers_report_outer_line() {
    let (logger, buffer) = capture(LogLevel::Info, LogFlags::SHORTFILE);
    let line = line!() + 1;
    log_through_helper(&logger);
    assert_eq!(
        buffer.contents(),
        format!("integration_tests.rs:{}: INFO: from helper\n", line)
    );
}

#[test]
fn test_long_file_reports_full_path() {
    let (logger, buffer) = capture(LogLevel::Info, LogFlags::LONGFILE);
    let line = line!() + 1;
    info!(logger, "where").unwrap();

    let expected_tail = format!("integration_tests.rs:{}: INFO: where\n", line);
    let contents = buffer.contents();
    assert!(contents.ends_with(&expected_tail), "got {:?}", contents);
    assert!(contents.starts_with("tests"), "got {:?}", contents);
}

#[test]
fn test_date_time_header_shape() {
    let (logger, buffer) = capture(
        LogLevel::Info,
        LogFlags::STD_FLAGS | LogFlags::MICROSECONDS | LogFlags::UTC,
    );
    logger.info(&[&"stamped"]).unwrap();

    // 2025/01/08 10:30:45.123456 INFO: stamped
    let contents = buffer.contents();
    let (stamp, rest) = contents.split_at("2025/01/08 10:30:45.123456 ".len());
    assert_eq!(rest, "INFO: stamped\n");
    let bytes = stamp.as_bytes();
    assert_eq!(bytes[4], b'/');
    assert_eq!(bytes[7], b'/');
    assert_eq!(bytes[10], b' ');
    assert_eq!(bytes[13], b':');
    assert_eq!(bytes[16], b':');
    assert_eq!(bytes[19], b'.');
    assert_eq!(bytes[26], b' ');
    assert!(stamp
        .chars()
        .all(|c| c.is_ascii_digit() || "/:. ".contains(c)));
}

#[test]
fn test_error_threshold() {
    let (logger, buffer) = capture(LogLevel::Error, LogFlags::NONE);
    logger.set_level_string_type(LevelStringType::Short);

    logger.error(&[&"error", &42]).unwrap();
    assert_eq!(buffer.contents(), "ERR: error42\n");
    buffer.clear();

    errorf!(logger, "errorf: {} {}", 42, "zaphod").unwrap();
    assert_eq!(buffer.contents(), "ERR: errorf: 42 zaphod\n");
    buffer.clear();

    logger.errorln(&[&"errorln", &42]).unwrap();
    assert_eq!(buffer.contents(), "ERR: errorln 42\n");
    buffer.clear();

    logger.info(&[&"info"]).unwrap();
    logger.infof(format_args!("infof: {}", 42)).unwrap();
    logger.infoln(&[&"infoln"]).unwrap();
    logger.debug(&[&"debug"]).unwrap();
    logger.debugf(format_args!("debugf: {}", 42)).unwrap();
    logger.debugln(&[&"debugln"]).unwrap();
    assert!(buffer.is_empty(), "expected no bytes, got {:?}", buffer.contents());
}

#[test]
fn test_info_threshold() {
    let (logger, buffer) = capture(LogLevel::Info, LogFlags::NONE);

    logger.errorln(&[&"errorln:", &42]).unwrap();
    assert_eq!(buffer.contents(), "ERROR: errorln: 42\n");
    buffer.clear();

    logger.info(&[&"info", &"trillian", &"arthur"]).unwrap();
    assert_eq!(buffer.contents(), "INFO: infotrillianarthur\n");
    buffer.clear();

    logger.infof(format_args!("infof: {} {}", 42, 11)).unwrap();
    assert_eq!(buffer.contents(), "INFO: infof: 42 11\n");
    buffer.clear();

    logger.debug(&[&"debug"]).unwrap();
    logger.debugf(format_args!("debugf: {}", 42)).unwrap();
    logger.debugln(&[&"debugln"]).unwrap();
    assert!(buffer.is_empty());
}

#[test]
fn test_debug_threshold() {
    let (logger, buffer) = capture(LogLevel::Debug, LogFlags::NONE);

    logger.error(&[&"error"]).unwrap();
    logger.info(&[&"info"]).unwrap();
    logger.debug(&[&"debug", &"hoopy", &"frood"]).unwrap();
    logger.debugln(&[&"debugln:", &42, &1999]).unwrap();

    assert_eq!(
        buffer.contents(),
        "ERROR: error\nINFO: info\nDEBUG: debughoopyfrood\nDEBUG: debugln: 42 1999\n"
    );
}

#[test]
fn test_none_threshold_suppresses_everything() {
    let (logger, buffer) = capture(LogLevel::None, LogFlags::STD_FLAGS);

    logger.error(&[&"error"]).unwrap();
    logger.errorf(format_args!("errorf: {}", 42)).unwrap();
    logger.info(&[&"info"]).unwrap();
    logger.debugln(&[&"debug"]).unwrap();
    logger.print(&[&"print"]).unwrap();
    logger.printf(format_args!("printf")).unwrap();
    logger.println(&[&"println"]).unwrap();

    assert!(buffer.is_empty());
}

#[test]
fn test_label_styles_and_prefix() {
    let (logger, buffer) = capture(LogLevel::Debug, LogFlags::NONE);

    logger.set_flags(LogFlags::STD_FLAGS);
    assert_eq!(logger.flags(), LogFlags::STD_FLAGS);
    logger.set_flags(LogFlags::NONE);

    logger.error(&[&"error"]).unwrap();
    assert_eq!(buffer.contents(), "ERROR: error\n");
    buffer.clear();

    logger.set_level_string_type(LevelStringType::Char);
    logger.errorf(format_args!("errorf: {}", 42)).unwrap();
    assert_eq!(buffer.contents(), "E: errorf: 42\n");
    buffer.clear();

    logger.set_level_string_type(LevelStringType::Short);
    logger.infoln(&[&"infoln:", &42]).unwrap();
    assert_eq!(buffer.contents(), "INF: infoln: 42\n");
    buffer.clear();

    logger.set_prefix("xyz");
    assert_eq!(logger.prefix(), "xyz");
    debug!(logger, "debug").unwrap();
    assert_eq!(buffer.contents(), "xyzDBG: debug\n");
    buffer.clear();

    logger.set_level_string_type(LevelStringType::Char);
    logger.set_prefix("abc");
    logger.debug(&[&"y"]).unwrap();
    assert_eq!(buffer.contents(), "abcD: y\n");
}

#[test]
fn test_prefix_precedes_file_position() {
    let (logger, buffer) = capture(LogLevel::Info, LogFlags::SHORTFILE);
    logger.set_prefix("[svc] ");

    let line = line!() + 1;
    logger.info(&[&"up"]).unwrap();
    assert_eq!(
        buffer.contents(),
        format!("[svc] integration_tests.rs:{}: INFO: up\n", line)
    );
}

#[test]
fn test_level_change_takes_effect_on_next_call() {
    let (logger, buffer) = capture(LogLevel::Debug, LogFlags::NONE);

    logger.debug(&[&"one"]).unwrap();
    logger.set_level(LogLevel::None);
    assert_eq!(logger.level(), LogLevel::None);
    logger.error(&[&"two"]).unwrap();
    logger.set_level(LogLevel::Info);
    logger.info(&[&"three"]).unwrap();

    assert_eq!(buffer.contents(), "DEBUG: one\nINFO: three\n");
}

#[test]
fn test_buffered_writer_flushed_by_cleanup() {
    let buffer = SharedBuffer::default();
    let writer = SharedWriter::new(BufWriter::new(buffer.clone()));
    let flusher = writer.clone();

    let logger = Logger::new(LogLevel::Error, writer, "", LogFlags::NONE);
    logger.add_func(move || flusher.with(|w| w.flush()));

    logger.error(&[&"oh no!"]).unwrap();
    assert!(buffer.is_empty());

    logger.close().unwrap();
    assert_eq!(buffer.contents(), "ERROR: oh no!\n");
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Accepts one byte fewer than offered
struct ShortWriter {
    calls: Arc<AtomicUsize>,
}

impl Write for ShortWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(buf.len().saturating_sub(1))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_error_is_returned_and_not_sticky() {
    let logger = Logger::new(LogLevel::Info, FailingWriter, "", LogFlags::NONE);

    let err = logger.info(&[&"lost"]).unwrap_err();
    assert!(matches!(err, LoggerError::IoError(_)));
    assert!(err.to_string().contains("pipe closed"));

    // Dropped messages are not errors
    logger.debug(&[&"gated"]).unwrap();

    let buffer = SharedBuffer::default();
    logger.set_output(buffer.clone());
    logger.info(&[&"kept"]).unwrap();
    assert_eq!(buffer.contents(), "INFO: kept\n");
    assert_eq!(logger.level(), LogLevel::Info);
}

#[test]
fn test_short_write_is_reported_without_retry() {
    let calls = Arc::new(AtomicUsize::new(0));
    let logger = Logger::new(
        LogLevel::Info,
        ShortWriter {
            calls: Arc::clone(&calls),
        },
        "",
        LogFlags::NONE,
    );

    let err = logger.info(&[&"abc"]).unwrap_err();
    assert_eq!(err, LoggerError::short_write(9, 10));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_close_order_and_first_error() {
    let (logger, _buffer) = capture(LogLevel::Info, LogFlags::NONE);
    let order = Arc::new(parking_lot::Mutex::new(Vec::new()));

    for (id, fail) in [(0, false), (1, true), (2, true), (3, false)] {
        let order = Arc::clone(&order);
        logger.add_func(move || {
            order.lock().push(id);
            if fail {
                Err(io::Error::new(io::ErrorKind::Other, format!("hook {} failed", id)))
            } else {
                Ok(())
            }
        });
    }

    let err = logger.close().unwrap_err();
    assert!(matches!(err, LoggerError::Cleanup { index: 1, .. }));
    assert!(err.to_string().contains("hook 1 failed"));
    assert_eq!(*order.lock(), vec![0, 1, 2, 3]);

    // Already run hooks are not repeated
    logger.close().unwrap();
    assert_eq!(order.lock().len(), 4);
}

#[test]
fn test_config_driven_logger() {
    let config = LoggerConfig::from_json(
        r#"{"level": "error", "label_style": "char", "flags": "none", "prefix": "cfg "}"#,
    )
    .unwrap();
    let buffer = SharedBuffer::default();
    let logger = config.build(buffer.clone()).unwrap();

    logger.info(&[&"hidden"]).unwrap();
    logger.error(&[&"shown"]).unwrap();
    assert_eq!(buffer.contents(), "cfg E: shown\n");
}
