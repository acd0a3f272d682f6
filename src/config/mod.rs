//! Configuration types for the cellar client.
//!
//! # Overview
//!
//! - [`ClientConfig`]: Target host, scheme, and user agent settings
//! - [`ClientConfigBuilder`]: A builder for constructing [`ClientConfig`] instances
//! - [`Host`]: A validated `hostname[:port]`
//! - [`Scheme`]: `http` or `https`
//!
//! # Example
//!
//! ```rust
//! use cellar_client::{ClientConfig, Host, Scheme};
//!
//! let config = ClientConfig::builder()
//!     .host(Host::new("localhost:8080").unwrap())
//!     .scheme(Scheme::Https)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.scheme(), Scheme::Https);
//! ```

mod newtypes;

pub use newtypes::{Host, Scheme};

use reqwest::header::HeaderValue;

use crate::error::ConfigError;

/// Configuration for a cellar [`Client`](crate::Client).
///
/// The configuration is caller-owned and long-lived across requests.
///
/// # Thread Safety
///
/// `ClientConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    host: Host,
    scheme: Option<Scheme>,
    user_agent_prefix: Option<String>,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the target host.
    #[must_use]
    pub const fn host(&self) -> &Host {
        &self.host
    }

    /// Returns the effective scheme, defaulting to `http` when unset.
    #[must_use]
    pub fn scheme(&self) -> Scheme {
        self.scheme.unwrap_or_default()
    }

    /// Returns the scheme exactly as configured.
    #[must_use]
    pub const fn configured_scheme(&self) -> Option<Scheme> {
        self.scheme
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// `host` is required.
///
/// # Defaults
///
/// - `scheme`: unset, resolved to `http` at request time
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    host: Option<Host>,
    scheme: Option<Scheme>,
    user_agent_prefix: Option<String>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the target host (required).
    #[must_use]
    pub fn host(mut self, host: Host) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the URL scheme.
    #[must_use]
    pub const fn scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = Some(scheme);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `host` is not set, or
    /// [`ConfigError::InvalidUserAgentPrefix`] if the prefix is not a legal
    /// header value.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let host = self
            .host
            .ok_or(ConfigError::MissingRequiredField { field: "host" })?;

        if let Some(prefix) = &self.user_agent_prefix {
            if HeaderValue::from_str(prefix).is_err() {
                return Err(ConfigError::InvalidUserAgentPrefix {
                    prefix: prefix.clone(),
                });
            }
        }

        Ok(ClientConfig {
            host,
            scheme: self.scheme,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_host() {
        let result = ClientConfig::builder().build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "host" })
        ));
    }

    #[test]
    fn test_unset_scheme_resolves_to_http() {
        let config = ClientConfig::builder()
            .host(Host::new("localhost").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.configured_scheme(), None);
        assert_eq!(config.scheme(), Scheme::Http);
    }

    #[test]
    fn test_configured_scheme_is_kept() {
        let config = ClientConfig::builder()
            .host(Host::new("localhost").unwrap())
            .scheme(Scheme::Https)
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.scheme(), Scheme::Https);
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
        assert_eq!(config.host().as_ref(), "localhost");
    }

    #[test]
    fn test_builder_rejects_user_agent_prefix_with_newline() {
        let result = ClientConfig::builder()
            .host(Host::new("localhost").unwrap())
            .user_agent_prefix("MyApp\nX-Injected: 1")
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidUserAgentPrefix { prefix }) if prefix == "MyApp\nX-Injected: 1"
        ));
    }
}
