//! Request signing.
//!
//! A [`RequestSigner`] adds authentication material to an outgoing request
//! before it is dispatched. The account resource only signs the create
//! action, which is protected by the admin basic-auth scheme.

use std::fmt;

use async_trait::async_trait;
use base64::prelude::*;
use reqwest::header::{HeaderValue, AUTHORIZATION};

use crate::clients::context::RequestContext;
use crate::clients::errors::SignerError;
use crate::clients::http_request::HttpRequest;
use crate::error::ConfigError;

/// Mutates an outgoing request to authenticate it.
#[async_trait]
pub trait RequestSigner: Send + Sync {
    /// Signs `request` in place.
    ///
    /// # Errors
    ///
    /// Returns [`SignerError`] if the request cannot be signed. The client
    /// logs the error and sends the request as it stands.
    async fn sign(&self, ctx: &RequestContext, request: &mut HttpRequest)
        -> Result<(), SignerError>;
}

/// Signs requests with HTTP basic authentication.
///
/// # Security
///
/// The `Debug` implementation masks the password.
///
/// # Example
///
/// ```rust
/// use cellar_client::BasicAuthSigner;
///
/// let signer = BasicAuthSigner::new("admin", "secret").unwrap();
/// assert_eq!(signer.username(), "admin");
/// assert_eq!(
///     format!("{signer:?}"),
///     r#"BasicAuthSigner { username: "admin", password: "*****" }"#
/// );
/// ```
#[derive(Clone)]
pub struct BasicAuthSigner {
    username: String,
    password: String,
}

impl BasicAuthSigner {
    /// Creates a basic-auth signer.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCredential`] if `username` is empty.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let username = username.into();
        if username.is_empty() {
            return Err(ConfigError::EmptyCredential { field: "username" });
        }
        Ok(Self {
            username,
            password: password.into(),
        })
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    fn header_value(&self) -> Result<HeaderValue, SignerError> {
        let credentials = BASE64_STANDARD.encode(format!("{}:{}", self.username, self.password));
        let mut value = HeaderValue::from_str(&format!("Basic {credentials}"))
            .map_err(|_| SignerError::InvalidHeader {
                name: "Authorization",
            })?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for BasicAuthSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuthSigner")
            .field("username", &self.username)
            .field("password", &"*****")
            .finish()
    }
}

#[async_trait]
impl RequestSigner for BasicAuthSigner {
    async fn sign(
        &self,
        ctx: &RequestContext,
        request: &mut HttpRequest,
    ) -> Result<(), SignerError> {
        if ctx.is_cancelled() {
            return Err(SignerError::Cancelled);
        }
        request.set_header(AUTHORIZATION, self.header_value()?);
        Ok(())
    }
}

/// Signs requests with a bearer token.
///
/// # Security
///
/// The `Debug` implementation masks the token.
#[derive(Clone)]
pub struct BearerTokenSigner {
    token: String,
}

impl BearerTokenSigner {
    /// Creates a bearer-token signer.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCredential`] if `token` is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyCredential { field: "token" });
        }
        Ok(Self { token })
    }
}

impl fmt::Debug for BearerTokenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerTokenSigner(*****)")
    }
}

#[async_trait]
impl RequestSigner for BearerTokenSigner {
    async fn sign(
        &self,
        ctx: &RequestContext,
        request: &mut HttpRequest,
    ) -> Result<(), SignerError> {
        if ctx.is_cancelled() {
            return Err(SignerError::Cancelled);
        }
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.token)).map_err(|_| {
            SignerError::InvalidHeader {
                name: "Authorization",
            }
        })?;
        value.set_sensitive(true);
        request.set_header(AUTHORIZATION, value);
        Ok(())
    }
}
