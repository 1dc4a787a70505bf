//! Error types for the ORCID publication report.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use std::path::PathBuf;

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Resource not found (404 response)
    #[error("Resource not found: {resource}")]
    NotFound {
        /// Description of the missing resource
        resource: String,
    },

    /// Any other non-success HTTP status
    #[error("Request to {url} failed with status {status}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Response body was not valid JSON
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ClientError {
    /// Create a not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create an unexpected status error.
    #[must_use]
    pub fn status(status: u16, url: impl Into<String>) -> Self {
        Self::Status { status, url: url.into() }
    }

    /// Returns true if the upstream reported the resource as missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// HTTP status code carried by this error, if any.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A malformed ORCID iD.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// Nothing was supplied.
    #[error("ORCID iD is empty")]
    Empty,

    /// Input is not four hyphen-separated groups of four digits or letters.
    #[error(
        "invalid ORCID iD '{0}': expected four hyphen-separated groups of four digits or letters \
         (e.g. 0000-0001-9812-1078)"
    )]
    Malformed(String),
}

/// Errors that abort report generation.
#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    /// The top-level record could not be fetched.
    #[error("Failed to fetch ORCID record: {0}")]
    Record(#[source] ClientError),

    /// The output document could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    FileWrite {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    /// Create a file write error.
    #[must_use]
    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileWrite { path: path.into(), source }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_status_code() {
        assert_eq!(ClientError::not_found("work 42").status_code(), Some(404));
        assert_eq!(ClientError::status(503, "https://example.org").status_code(), Some(503));

        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(ClientError::from(parse).status_code(), None);
    }

    #[test]
    fn test_client_error_is_not_found() {
        assert!(ClientError::not_found("record").is_not_found());
        assert!(!ClientError::status(500, "x").is_not_found());
    }

    #[test]
    fn test_file_write_message_names_path() {
        let err = ReportError::file_write(
            "/no/such/dir/README.md",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.to_string().contains("/no/such/dir/README.md"));
    }

    #[test]
    fn test_record_error_message() {
        let err = ReportError::Record(ClientError::not_found("0000-0000-0000-0000"));
        assert!(err.to_string().contains("Failed to fetch ORCID record"));
        assert!(err.to_string().contains("0000-0000-0000-0000"));
    }
}
