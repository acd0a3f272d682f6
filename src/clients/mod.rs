//! HTTP client types for cellar API communication.
//!
//! # Overview
//!
//! - [`Client`]: Builds, signs, and dispatches resource requests
//! - [`HttpExecutor`]: Performs the network round trip
//! - [`ReqwestExecutor`]: Default executor built on `reqwest`
//! - [`RequestSigner`]: Adds authentication to outgoing requests
//! - [`BasicAuthSigner`], [`BearerTokenSigner`]: Provided signers
//! - [`RequestContext`]: Cancellation token and deadline for a request
//! - [`HttpRequest`], [`HttpResponse`], [`HttpMethod`]: Request/response types
//! - [`ClientError`], [`HttpError`], [`SignerError`]: Error types
//!
//! # Request Lifecycle
//!
//! 1. The payload, if any, is serialized to JSON. Failure stops here.
//! 2. The URL is composed from scheme (default `http`), host, and path.
//! 3. `Content-Type: application/json` and `User-Agent` are set.
//! 4. Signed actions run the signer. A signer error is logged and the
//!    request is still sent.
//! 5. The executor sends the request once and returns the raw response.
//!
//! No retries are attempted and status codes are not interpreted.

mod context;
mod errors;
mod executor;
pub(crate) mod http_client;
mod http_request;
mod http_response;
mod signer;

pub use context::RequestContext;
pub use errors::{ClientError, HttpError, SignerError};
pub use executor::{HttpExecutor, ReqwestExecutor};
pub use http_client::{Client, CLIENT_VERSION, DEFAULT_USER_AGENT};
pub use http_request::{HttpMethod, HttpRequest, JSON_CONTENT_TYPE};
pub use http_response::HttpResponse;
pub use signer::{BasicAuthSigner, BearerTokenSigner, RequestSigner};
