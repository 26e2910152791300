//! Error types for the ADS export tool.

use std::path::PathBuf;
use std::time::Duration;

/// Errors that can occur while exporting ADS libraries.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP request failed (network, timeout, etc.)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// ADS API returned an error status code.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// No usable API token, or the API rejected it (HTTP 401).
    #[error("Authentication required: provide a token file or set ADS_API_TOKEN (or SCIX_API_TOKEN)")]
    AuthRequired,

    /// Rate limited by the ADS API (HTTP 429).
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited { retry_after: Option<Duration> },

    /// Failed to parse an API response.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Resource not found (HTTP 404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading or writing a local file failed.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the error is a missing local file.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            Error::NotFound(_) => true,
            _ => false,
        }
    }
}

/// Convenience alias for Results using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display_names_path() {
        let err = Error::io(
            "AAS_macros.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "AAS_macros.txt: No such file or directory"
        );
    }

    #[test]
    fn test_api_error_is_not_not_found() {
        let err = Error::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "API error (HTTP 500): boom");
    }
}
