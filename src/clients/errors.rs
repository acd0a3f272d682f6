//! Request-time error types for the cellar client.
//!
//! # Error Handling
//!
//! - [`HttpError`]: Transport failures reported by an [`HttpExecutor`](super::HttpExecutor)
//! - [`SignerError`]: Failures reported by a [`RequestSigner`](super::RequestSigner), logged
//!   by the client and not returned to the caller
//! - [`ClientError`]: Unified error returned by account operations
//!
//! Status codes are never interpreted here. A 404 or 500 is a successful
//! round trip and comes back as an [`HttpResponse`](super::HttpResponse).
//!
//! # Example
//!
//! ```rust,ignore
//! use cellar_client::{ClientError, HttpError};
//!
//! match client.show_account(&ctx, &show_account_path(1)).await {
//!     Ok(response) => println!("Status {}", response.code),
//!     Err(ClientError::Http(HttpError::Cancelled)) => println!("Cancelled"),
//!     Err(ClientError::Http(e)) => println!("Transport error: {e}"),
//!     Err(e) => println!("Request not sent: {e}"),
//! }
//! ```

use std::time::Duration;

use thiserror::Error;

/// Transport-level failure while executing a request.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request context was cancelled before a response arrived.
    #[error("Request was cancelled before a response was received.")]
    Cancelled,

    /// The request context deadline elapsed before a response arrived.
    #[error("Request timed out after {timeout:?}.")]
    Timeout {
        /// The timeout that elapsed.
        timeout: Duration,
    },

    /// Failure reported by a custom executor.
    #[error("Executor error: {0}")]
    Executor(String),
}

/// Failure while signing an outgoing request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignerError {
    /// The request context was cancelled before signing.
    #[error("Request signing was cancelled.")]
    Cancelled,

    /// The signer produced a value that is not a legal header value.
    #[error("Invalid value for header '{name}'.")]
    InvalidHeader {
        /// The header that could not be set.
        name: &'static str,
    },

    /// Failure reported by a custom signer.
    #[error("Failed to sign request: {0}")]
    Failed(String),
}

/// Error returned by account operations.
///
/// `Serialize` and `InvalidUrl` are raised before any network I/O. `Http`
/// carries the executor's error unmodified. Signer failures are logged and
/// never surface here.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request payload could not be serialized to JSON.
    #[error("failed to serialize body: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The target URL could not be composed from scheme, host, and path.
    #[error("Invalid request URL '{url}': {reason}")]
    InvalidUrl {
        /// The URL that failed to parse.
        url: String,
        /// Why parsing failed.
        reason: String,
    },

    /// The executor failed to complete the request.
    #[error(transparent)]
    Http(#[from] HttpError),
}
