//! Error types for the msg2phone library
//!
//! Structured errors with source chains, shared by the config store, the
//! gateway client, and the CLI surface.

use std::path::PathBuf;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("File I/O error for '{}': {operation}", .path.display())]
    Io {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Gateway request failed")]
    Http {
        #[from]
        source: reqwest::Error,
    },

    #[error("Gateway returned HTTP {status}: {reason}")]
    Status { status: u16, reason: String },

    #[error("Malformed gateway reply: {message}")]
    Reply {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new Config error with source
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new I/O error with source
    pub fn io_with_source(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    /// Create a new Reply error
    pub fn reply(message: impl Into<String>) -> Self {
        Self::Reply {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new Reply error with source
    pub fn reply_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Reply {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::config("missing url");
        assert_eq!(err.to_string(), "Configuration error: missing url");

        let err = AppError::Status {
            status: 503,
            reason: "unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "Gateway returned HTTP 503: unavailable");
    }

    #[test]
    fn test_io_error_carries_path_and_operation() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = AppError::io_with_source("/tmp/x", "read config file", source);
        let rendered = err.to_string();
        assert!(rendered.contains("/tmp/x"));
        assert!(rendered.contains("read config file"));
    }
}
