//! The cellar API client.
//!
//! [`Client`] owns the configuration and the injected collaborators, and
//! implements the request construction shared by every resource action:
//! serialize, compose the URL, set headers, optionally sign, dispatch.

use std::fmt;
use std::sync::Arc;

use reqwest::header::{HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::Url;
use serde::Serialize;

use crate::clients::context::RequestContext;
use crate::clients::errors::{ClientError, HttpError};
use crate::clients::executor::{HttpExecutor, ReqwestExecutor};
use crate::clients::http_request::{HttpMethod, HttpRequest, JSON_CONTENT_TYPE};
use crate::clients::http_response::HttpResponse;
use crate::clients::signer::RequestSigner;
use crate::config::ClientConfig;

/// Client version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// `User-Agent` sent when no prefix is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("cellar-client v", env!("CARGO_PKG_VERSION"));

/// Whether an action runs the configured signer before dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Signing {
    Signed,
    Unsigned,
}

/// Client for the cellar API.
///
/// Holds the configuration, an [`HttpExecutor`], and an optional
/// [`RequestSigner`] used by actions that require authentication.
///
/// # Thread Safety
///
/// `Client` is `Send + Sync`. Actions take `&self` and share no mutable
/// state, so one client can serve concurrent callers.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use cellar_client::{BasicAuthSigner, Client, ClientConfig, Host, RequestContext};
/// use cellar_client::resources::account::{create_account_path, CreateAccountPayload};
///
/// let config = ClientConfig::builder()
///     .host(Host::new("localhost:8080")?)
///     .build()?;
///
/// let client = Client::from_config(config)?
///     .with_signer(Arc::new(BasicAuthSigner::new("admin", "password")?));
///
/// let ctx = RequestContext::new();
/// let payload = CreateAccountPayload::new("Wine Cellar");
/// let response = client.create_account(&ctx, &create_account_path(), &payload).await?;
/// ```
pub struct Client {
    config: ClientConfig,
    executor: Arc<dyn HttpExecutor>,
    signer: Option<Arc<dyn RequestSigner>>,
    user_agent: HeaderValue,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client {
    /// Creates a client that dispatches through `executor`.
    #[must_use]
    pub fn new(config: ClientConfig, executor: Arc<dyn HttpExecutor>) -> Self {
        // The prefix is validated by `ClientConfigBuilder::build`
        let user_agent = config.user_agent_prefix().map_or_else(
            || HeaderValue::from_static(DEFAULT_USER_AGENT),
            |prefix| {
                HeaderValue::from_str(&format!("{prefix} | {DEFAULT_USER_AGENT}"))
                    .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_USER_AGENT))
            },
        );

        Self {
            config,
            executor,
            signer: None,
            user_agent,
        }
    }

    /// Creates a client backed by a default [`ReqwestExecutor`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying HTTP client cannot be built.
    pub fn from_config(config: ClientConfig) -> Result<Self, HttpError> {
        Ok(Self::new(config, Arc::new(ReqwestExecutor::new()?)))
    }

    /// Sets the signer applied to authenticated actions.
    #[must_use]
    pub fn with_signer(mut self, signer: Arc<dyn RequestSigner>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns `true` if a signer is configured.
    #[must_use]
    pub const fn has_signer(&self) -> bool {
        self.signer.is_some()
    }

    /// Returns the `User-Agent` sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        self.user_agent.to_str().unwrap_or(DEFAULT_USER_AGENT)
    }

    /// Composes the absolute URL for `path` from the configured scheme and host.
    ///
    /// The path always starts with `/`; an empty path yields `scheme://host/`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the result is not a valid URL.
    pub fn url_for(&self, path: &str) -> Result<Url, ClientError> {
        let base = format!("{}://{}", self.config.scheme(), self.config.host());
        let mut url = Url::parse(&base).map_err(|e| ClientError::InvalidUrl {
            url: format!("{base}{path}"),
            reason: e.to_string(),
        })?;
        url.set_path(path);
        Ok(url)
    }

    /// Builds the request for an action without signing or sending it.
    ///
    /// The payload, when present, is serialized first; nothing else happens
    /// if that fails.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Serialize`] if the payload cannot be serialized,
    /// or [`ClientError::InvalidUrl`] if the URL cannot be composed.
    pub fn build_request<T>(
        &self,
        method: HttpMethod,
        path: &str,
        payload: Option<&T>,
    ) -> Result<HttpRequest, ClientError>
    where
        T: Serialize + ?Sized,
    {
        let body = payload.map(serde_json::to_vec).transpose()?;

        let url = self.url_for(path)?;
        let mut request = HttpRequest::new(method, url);
        if let Some(body) = body {
            request = request.with_body(body);
        }

        request.set_header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        request.set_header(USER_AGENT, self.user_agent.clone());

        Ok(request)
    }

    /// Builds, optionally signs, and dispatches a request.
    pub(crate) async fn send<T>(
        &self,
        ctx: &RequestContext,
        method: HttpMethod,
        path: &str,
        payload: Option<&T>,
        signing: Signing,
    ) -> Result<HttpResponse, ClientError>
    where
        T: Serialize + ?Sized + Sync,
    {
        let mut request = self.build_request(method, path, payload)?;

        if signing == Signing::Signed {
            match &self.signer {
                Some(signer) => {
                    if let Err(error) = signer.sign(ctx, &mut request).await {
                        tracing::warn!(%method, path, %error, "signing failed, sending anyway");
                    }
                }
                None => tracing::debug!(%method, path, "no signer configured, sending unsigned"),
            }
        }

        tracing::debug!(%method, url = %request.url, "dispatching request");
        Ok(self.executor.execute(ctx, request).await?)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .field("has_signer", &self.signer.is_some())
            .field("user_agent", &self.user_agent())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::errors::SignerError;
    use crate::config::{Host, Scheme};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingExecutor {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl HttpExecutor for CountingExecutor {
        async fn execute(
            &self,
            _ctx: &RequestContext,
            _request: HttpRequest,
        ) -> Result<HttpResponse, HttpError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(HttpResponse::new(200, HashMap::new(), Vec::new()))
        }
    }

    #[derive(Default)]
    struct CountingSigner {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RequestSigner for CountingSigner {
        async fn sign(
            &self,
            _ctx: &RequestContext,
            _request: &mut HttpRequest,
        ) -> Result<(), SignerError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FailingSigner {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RequestSigner for FailingSigner {
        async fn sign(
            &self,
            _ctx: &RequestContext,
            _request: &mut HttpRequest,
        ) -> Result<(), SignerError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(SignerError::Failed("key store locked".to_string()))
        }
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            Err(serde::ser::Error::custom("payload rejected"))
        }
    }

    fn config(scheme: Option<Scheme>) -> ClientConfig {
        let mut builder = ClientConfig::builder().host(Host::new("localhost:8080").unwrap());
        if let Some(scheme) = scheme {
            builder = builder.scheme(scheme);
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_url_defaults_to_http() {
        let client = Client::new(config(None), Arc::new(CountingExecutor::default()));
        let url = client.url_for("/cellar/accounts/42").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/cellar/accounts/42");
    }

    #[test]
    fn test_url_uses_configured_scheme() {
        let client = Client::new(
            config(Some(Scheme::Https)),
            Arc::new(CountingExecutor::default()),
        );
        let url = client.url_for("/cellar/accounts").unwrap();
        assert_eq!(url.as_str(), "https://localhost:8080/cellar/accounts");
    }

    #[test]
    fn test_url_gets_leading_slash() {
        let client = Client::new(config(None), Arc::new(CountingExecutor::default()));
        let url = client.url_for("cellar/accounts").unwrap();
        assert_eq!(url.path(), "/cellar/accounts");
    }

    #[test]
    fn test_empty_path_yields_root() {
        let client = Client::new(config(None), Arc::new(CountingExecutor::default()));
        let url = client.url_for("").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/");
    }

    #[test]
    fn test_build_request_sets_content_type_without_body() {
        let client = Client::new(config(None), Arc::new(CountingExecutor::default()));
        let request = client
            .build_request::<()>(HttpMethod::Get, "/cellar/accounts/1", None)
            .unwrap();

        assert_eq!(request.header("content-type"), Some("application/json"));
        assert!(request.body.is_none());
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = ClientConfig::builder()
            .host(Host::new("localhost").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = Client::new(config, Arc::new(CountingExecutor::default()));

        assert!(client.user_agent().starts_with("MyApp/1.0 | "));
        assert!(client.user_agent().contains("cellar-client v"));

        let request = client
            .build_request::<()>(HttpMethod::Get, "/", None)
            .unwrap();
        assert_eq!(request.header("user-agent"), Some(client.user_agent()));
    }

    #[test]
    fn test_default_user_agent_is_always_sent() {
        let client = Client::new(config(None), Arc::new(CountingExecutor::default()));
        assert_eq!(client.user_agent(), DEFAULT_USER_AGENT);

        let request = client
            .build_request::<()>(HttpMethod::Delete, "/cellar/accounts/7", None)
            .unwrap();
        assert_eq!(request.header("user-agent"), Some(DEFAULT_USER_AGENT));
    }

    #[tokio::test]
    async fn test_serialization_failure_makes_no_calls() {
        let executor = Arc::new(CountingExecutor::default());
        let signer = Arc::new(CountingSigner::default());
        let client = Client::new(config(None), executor.clone()).with_signer(signer.clone());

        let result = client
            .send(
                &RequestContext::new(),
                HttpMethod::Post,
                "/cellar/accounts",
                Some(&Unserializable),
                Signing::Signed,
            )
            .await;

        assert!(matches!(result, Err(ClientError::Serialize(_))));
        assert_eq!(executor.calls.load(Ordering::SeqCst), 0);
        assert_eq!(signer.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unsigned_action_skips_signer() {
        let executor = Arc::new(CountingExecutor::default());
        let signer = Arc::new(CountingSigner::default());
        let client = Client::new(config(None), executor.clone()).with_signer(signer.clone());

        client
            .send::<()>(
                &RequestContext::new(),
                HttpMethod::Get,
                "/cellar/accounts/1",
                None,
                Signing::Unsigned,
            )
            .await
            .unwrap();

        assert_eq!(executor.calls.load(Ordering::SeqCst), 1);
        assert_eq!(signer.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_signed_action_without_signer_still_dispatches() {
        let executor = Arc::new(CountingExecutor::default());
        let client = Client::new(config(None), executor.clone());
        assert!(!client.has_signer());

        client
            .send(
                &RequestContext::new(),
                HttpMethod::Post,
                "/cellar/accounts",
                Some(&serde_json::json!({"name": "x"})),
                Signing::Signed,
            )
            .await
            .unwrap();

        assert_eq!(executor.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_signer_failure_still_dispatches() {
        let executor = Arc::new(CountingExecutor::default());
        let signer = Arc::new(FailingSigner {
            calls: AtomicUsize::new(0),
        });
        let client = Client::new(config(None), executor.clone()).with_signer(signer.clone());

        let response = client
            .send(
                &RequestContext::new(),
                HttpMethod::Post,
                "/cellar/accounts",
                Some(&serde_json::json!({"name": "x"})),
                Signing::Signed,
            )
            .await
            .unwrap();

        assert_eq!(response.code, 200);
        assert_eq!(signer.calls.load(Ordering::SeqCst), 1);
        assert_eq!(executor.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_debug_omits_collaborators() {
        let client = Client::new(config(None), Arc::new(CountingExecutor::default()));
        let debug = format!("{client:?}");
        assert!(debug.contains("has_signer: false"));
        assert!(debug.contains("localhost:8080"));
    }
}
