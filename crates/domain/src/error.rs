//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while resolving a test case into a
/// dispatchable request.
///
/// These are never fatal to a run: a case that fails resolution is
/// skipped or reported, and processing continues with the next case.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The resolved URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Neither the test case nor the file defaults supplied a URL.
    #[error("no URL supplied by the test case or the file defaults")]
    MissingUrl,

    /// The HTTP method is not supported.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// The declared response type is neither XML nor JSON.
    #[error("unsupported response type: {0}")]
    UnsupportedResponseType(String),

    /// The URL scheme is neither http nor https.
    #[error("unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
