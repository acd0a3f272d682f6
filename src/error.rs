//! Error types for the cellar client.
//!
//! This module contains error types used for configuration and validation.
//! Request-time errors live in [`crate::clients`].
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use cellar_client::{ConfigError, Host};
//!
//! let result = Host::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyHost)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Host cannot be empty.
    #[error("Host cannot be empty. Please provide the API host (e.g., 'localhost:8080').")]
    EmptyHost,

    /// Host is malformed.
    #[error("Invalid host '{host}'. Expected format: 'hostname' or 'hostname:port', without scheme or path.")]
    InvalidHost {
        /// The invalid host that was provided.
        host: String,
    },

    /// Scheme is not supported.
    #[error("Invalid scheme '{scheme}'. Expected 'http' or 'https'.")]
    InvalidScheme {
        /// The invalid scheme that was provided.
        scheme: String,
    },

    /// A credential value used by a signer is empty.
    #[error("Credential '{field}' cannot be empty.")]
    EmptyCredential {
        /// The name of the empty credential.
        field: &'static str,
    },

    /// The user agent prefix cannot be sent as a header value.
    #[error("Invalid user agent prefix '{prefix}'. It must be visible ASCII without control characters.")]
    InvalidUserAgentPrefix {
        /// The rejected prefix.
        prefix: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
