//! Per-request cancellation and deadline.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// Cancellation and deadline information passed along with every request.
///
/// A context is handed to the signer and the executor. Executors are
/// expected to abort the in-flight request when the token is cancelled and
/// to give up once the timeout elapses.
///
/// Clones share the same cancellation token, so cancelling any clone
/// cancels them all.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use cellar_client::RequestContext;
///
/// let ctx = RequestContext::new().with_timeout(Duration::from_secs(5));
/// let handle = ctx.clone();
///
/// handle.cancel();
/// assert!(ctx.is_cancelled());
/// assert_eq!(ctx.timeout(), Some(Duration::from_secs(5)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct RequestContext {
    token: CancellationToken,
    timeout: Option<Duration>,
}

impl RequestContext {
    /// Creates a context with a fresh token and no timeout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context driven by an existing cancellation token.
    #[must_use]
    pub const fn with_token(token: CancellationToken) -> Self {
        Self {
            token,
            timeout: None,
        }
    }

    /// Sets the maximum time an executor may spend on the request.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Derives a context whose token is cancelled along with this one,
    /// but which can also be cancelled on its own.
    #[must_use]
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            timeout: self.timeout,
        }
    }

    /// Returns the cancellation token.
    #[must_use]
    pub const fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Returns the timeout, if one is set.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Cancels this context and every clone and child of it.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Returns `true` once the context has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}
