//! Error handling for smoothiepost
//!
//! Provides error types for each layer of the post-processor:
//! - Post errors (output sink and input values)
//! - Script errors (parsing host command programs)
//!
//! Calling an unsupported capability is never an error; it is reported
//! in the output stream instead. All error types use `thiserror`.

use thiserror::Error;

/// Post-processor error type
///
/// Represents failures while translating commands into G-code.
#[derive(Error, Debug)]
pub enum PostError {
    /// Writing to the output sink failed
    #[error("Failed to write G-code output: {0}")]
    Io(#[from] std::io::Error),

    /// A selector or parameter value could not be interpreted
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue {
        /// The parameter name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl PostError {
    /// Create an invalid value error
    pub fn invalid_value(name: impl Into<String>, reason: impl Into<String>) -> Self {
        PostError::InvalidValue {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Script error type
///
/// Represents errors while reading a program script.
#[derive(Error, Debug)]
pub enum ScriptError {
    /// A command line could not be parsed
    #[error("Invalid command at line {line_number}: {reason}")]
    Parse {
        /// 1-based line of the offending command.
        line_number: usize,
        /// The parser message.
        reason: String,
    },

    /// The script document is not valid JSON
    #[error("Invalid script: {0}")]
    Json(#[from] serde_json::Error),
}

/// Main error type for smoothiepost
///
/// A unified error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Post-processor error
    #[error(transparent)]
    Post(#[from] PostError),

    /// Script error
    #[error(transparent)]
    Script(#[from] ScriptError),
}

impl Error {
    /// Check if this error came from the output sink
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Post(PostError::Io(_)))
    }

    /// Check if this is a script error
    pub fn is_script_error(&self) -> bool {
        matches!(self, Error::Script(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Post(PostError::Io(err))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_post_error_display() {
        let err = PostError::invalid_value("plane", "expected xy, xz or yz");
        assert_eq!(
            err.to_string(),
            "Invalid value for 'plane': expected xy, xz or yz"
        );
    }

    #[test]
    fn test_script_error_display() {
        let err = ScriptError::Parse {
            line_number: 4,
            reason: "unknown variant".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid command at line 4: unknown variant");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "closed");
        let err: Error = io_err.into();
        assert!(err.is_io_error());
        assert!(!err.is_script_error());
        assert_eq!(err.to_string(), "Failed to write G-code output: closed");
    }

    #[test]
    fn test_error_conversion() {
        let script_err = ScriptError::Parse {
            line_number: 1,
            reason: "eof".to_string(),
        };
        let err: Error = script_err.into();
        assert!(err.is_script_error());
        assert!(!err.is_io_error());
    }
}
