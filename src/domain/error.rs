//! Error types for the authorgrid plugin.
//!
//! Two layers of errors live here. [`FetchError`] is the taxonomy of a single
//! directory fetch attempt and is surfaced to the user as the error panel.
//! [`AuthorGridError`] consolidates everything else the plugin can fail at
//! (theme loading, configuration, filesystem) and wraps `FetchError` for
//! callers that want a single error type.

use thiserror::Error;

/// Failure of one attempt to fetch the author directory.
///
/// Every variant is terminal for the attempt it belongs to and recoverable by
/// retrying. The `Display` output is the human-readable detail shown in the
/// error panel.
///
/// # Examples
///
/// ```
/// use authorgrid::domain::FetchError;
///
/// let err = FetchError::Status { status: 500, detail: String::new() };
/// assert_eq!(err.to_string(), "HTTP 500");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The endpoint answered with a non-success status code.
    ///
    /// `detail` carries a short excerpt of the response body, which is where
    /// the host puts transport failure descriptions.
    #[error("HTTP {status}{}", detail_suffix(.detail))]
    Status {
        /// HTTP status code returned by the host.
        status: u16,
        /// Trimmed excerpt of the response body, possibly empty.
        detail: String,
    },

    /// The request never produced a response.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The body was not a JSON array of author records.
    #[error("invalid response body: {0}")]
    Parse(String),
}

impl FetchError {
    /// Returns `true` for errors caused by a malformed response body.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

fn detail_suffix(detail: &str) -> String {
    if detail.is_empty() {
        String::new()
    } else {
        format!(": {detail}")
    }
}

/// The main error type for authorgrid operations outside the fetch pipeline.
#[derive(Debug, Error)]
pub enum AuthorGridError {
    /// A directory fetch failed.
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A configuration value is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for authorgrid operations.
pub type Result<T> = std::result::Result<T, AuthorGridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_mentions_code_and_detail() {
        let err = FetchError::Status {
            status: 503,
            detail: "upstream down".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503: upstream down");
    }

    #[test]
    fn fetch_error_converts_into_crate_error() {
        let err: AuthorGridError = FetchError::Parse("expected array".to_string()).into();
        assert!(matches!(err, AuthorGridError::Fetch(ref inner) if inner.is_parse()));
        assert!(err.to_string().contains("expected array"));
    }
}
