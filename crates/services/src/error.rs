//! Shared error types for the services crate.

use thiserror::Error;

/// Transport-level failures talking to the passport backend.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GatewayError {
    #[error("API {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("response is missing `{0}`")]
    MissingField(&'static str),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors that halt the initial load. Each one is shown as a blocking message.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("Email required. Restart with --email you@company.com.")]
    IdentityMissing,
    #[error("A critical error occurred: {0}")]
    FetchFailed(#[from] GatewayError),
    #[error("Error: {0}")]
    BackendRejected(String),
}

/// Errors from an unlock attempt. Shown inline next to the unlock control.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UnlockError {
    #[error("Enter a code first.")]
    EmptyCode,
    #[error("{0}")]
    Rejected(String),
    #[error("Error: {0}")]
    Failed(#[from] GatewayError),
}

/// Errors emitted by identity stores.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IdentityError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
