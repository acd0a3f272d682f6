//! Request execution.
//!
//! [`HttpExecutor`] is the seam between request construction and the
//! network. [`ReqwestExecutor`] is the default implementation.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;

use crate::clients::context::RequestContext;
use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;

/// Performs the network round trip for a fully formed request.
///
/// Implementations must honor the context: abort when its token is
/// cancelled and give up once its timeout elapses. One call is one attempt.
#[async_trait]
pub trait HttpExecutor: Send + Sync {
    /// Sends `request` and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure, cancellation, or timeout.
    async fn execute(
        &self,
        ctx: &RequestContext,
        request: HttpRequest,
    ) -> Result<HttpResponse, HttpError>;
}

/// [`HttpExecutor`] backed by a `reqwest::Client`.
///
/// No retries are attempted. Status codes are not inspected.
///
/// # Example
///
/// ```rust,ignore
/// use cellar_client::{HttpExecutor, ReqwestExecutor};
///
/// let executor = ReqwestExecutor::new()?;
/// let response = executor.execute(&ctx, request).await?;
/// ```
#[derive(Clone, Debug)]
pub struct ReqwestExecutor {
    client: reqwest::Client,
}

// Verify ReqwestExecutor is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestExecutor>();
};

impl ReqwestExecutor {
    /// Creates an executor with a rustls-backed `reqwest::Client`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the client cannot be created.
    pub fn new() -> Result<Self, HttpError> {
        let client = reqwest::Client::builder().use_rustls_tls().build()?;
        Ok(Self { client })
    }

    /// Wraps an existing `reqwest::Client`.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
            result.entry(key).or_default().push(value);
        }
        result
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = self
            .client
            .request(request.method.into(), request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let res = builder.send().await?;
        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.bytes().await?.to_vec();

        Ok(HttpResponse::new(code, headers, body))
    }
}

async fn with_deadline<F>(timeout: Option<Duration>, fut: F) -> Result<HttpResponse, HttpError>
where
    F: Future<Output = Result<HttpResponse, HttpError>>,
{
    match timeout {
        Some(timeout) => tokio::time::timeout(timeout, fut)
            .await
            .map_err(|_| HttpError::Timeout { timeout })?,
        None => fut.await,
    }
}

#[async_trait]
impl HttpExecutor for ReqwestExecutor {
    async fn execute(
        &self,
        ctx: &RequestContext,
        request: HttpRequest,
    ) -> Result<HttpResponse, HttpError> {
        let method = request.method;
        let url = request.url.to_string();

        if ctx.is_cancelled() {
            tracing::warn!(%method, %url, "request cancelled before dispatch");
            return Err(HttpError::Cancelled);
        }

        tokio::select! {
            biased;
            () = ctx.token().cancelled() => {
                tracing::warn!(%method, %url, "request cancelled in flight");
                Err(HttpError::Cancelled)
            }
            result = with_deadline(ctx.timeout(), self.send(request)) => {
                if let Err(HttpError::Timeout { timeout }) = &result {
                    tracing::warn!(%method, %url, ?timeout, "request timed out");
                }
                result
            }
        }
    }
}
