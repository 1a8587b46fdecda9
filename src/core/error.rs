//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A header flag name that [`parse_log_flags`](super::flags::parse_log_flags) does not know
    #[error("unknown flag \"{token}\"")]
    UnknownFlag { token: String },

    /// A severity name that is not one of none/error/info/debug
    #[error("unknown log level \"{name}\"")]
    UnknownLevel { name: String },

    /// A label style name that is not one of full/char/short
    #[error("unknown level string type \"{name}\"")]
    UnknownLabelStyle { name: String },

    /// The destination accepted only part of a formatted line
    #[error("short write: {written} of {expected} bytes written")]
    ShortWrite { written: usize, expected: usize },

    /// Formatter error with format type
    #[error("Formatter error ({format_type}): {message}")]
    FormatterError {
        format_type: String,
        message: String,
    },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// A registered cleanup hook failed during close
    #[error("cleanup hook #{index} failed: {source}")]
    Cleanup {
        index: usize,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// JSON configuration error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl LoggerError {
    /// Create an unknown flag error carrying the offending token verbatim
    pub fn unknown_flag(token: impl Into<String>) -> Self {
        LoggerError::UnknownFlag {
            token: token.into(),
        }
    }

    pub fn unknown_level(name: impl Into<String>) -> Self {
        LoggerError::UnknownLevel { name: name.into() }
    }

    pub fn unknown_label_style(name: impl Into<String>) -> Self {
        LoggerError::UnknownLabelStyle { name: name.into() }
    }

    pub fn short_write(written: usize, expected: usize) -> Self {
        LoggerError::ShortWrite { written, expected }
    }

    /// Create a formatter error
    pub fn formatter(format_type: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FormatterError {
            format_type: format_type.into(),
            message: message.into(),
        }
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    pub fn cleanup(index: usize, source: std::io::Error) -> Self {
        LoggerError::Cleanup { index, source }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// The offending token if this is an unknown flag error
    pub fn flag_token(&self) -> Option<&str> {
        match self {
            LoggerError::UnknownFlag { token } => Some(token),
            _ => None,
        }
    }
}

/// Flag errors compare by their token; every other kind is never equal,
/// since `io::Error` has no meaningful equality.
impl PartialEq for LoggerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (LoggerError::UnknownFlag { token: a }, LoggerError::UnknownFlag { token: b }) => a == b,
            (LoggerError::UnknownLevel { name: a }, LoggerError::UnknownLevel { name: b }) => a == b,
            (
                LoggerError::UnknownLabelStyle { name: a },
                LoggerError::UnknownLabelStyle { name: b },
            ) => a == b,
            (
                LoggerError::ShortWrite {
                    written: w1,
                    expected: e1,
                },
                LoggerError::ShortWrite {
                    written: w2,
                    expected: e2,
                },
            ) => w1 == w2 && e1 == e2,
            _ => false,
        }
    }
}
