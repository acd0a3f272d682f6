//! # Cellar API Client
//!
//! A Rust client for the account resource of the cellar API.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - Validated [`Host`] and [`Scheme`] values
//! - Create, show, update, and delete actions for accounts on [`Client`]
//! - Pluggable transport via [`HttpExecutor`], with [`ReqwestExecutor`] as default
//! - Pluggable authentication via [`RequestSigner`]
//! - Cancellation and deadlines via [`RequestContext`]
//!
//! ## Quick Start
//!
//! ```rust
//! use cellar_client::{ClientConfig, Host, Scheme};
//!
//! let config = ClientConfig::builder()
//!     .host(Host::new("localhost:8080").unwrap())
//!     .scheme(Scheme::Http)
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making Requests
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use cellar_client::{BasicAuthSigner, Client, RequestContext};
//! use cellar_client::resources::account::{
//!     create_account_path, show_account_path, CreateAccountPayload,
//! };
//!
//! let client = Client::from_config(config)?
//!     .with_signer(Arc::new(BasicAuthSigner::new("admin", "password")?));
//!
//! let ctx = RequestContext::new();
//! let created = client
//!     .create_account(&ctx, &create_account_path(), &CreateAccountPayload::new("Cellar"))
//!     .await?;
//! println!("Created at {:?}", created.location());
//!
//! let shown = client.show_account(&ctx, &show_account_path(1)).await?;
//! println!("{}", shown.text());
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Raw responses**: Status codes and bodies are returned to the caller as-is
//! - **Single attempt**: No retries, caching, or idempotency keys
//! - **Thread-safe**: [`Client`] is `Send + Sync`

pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

// Re-export public types at crate root for convenience
pub use config::{ClientConfig, ClientConfigBuilder, Host, Scheme};
pub use error::ConfigError;

pub use clients::{
    BasicAuthSigner, BearerTokenSigner, Client, ClientError, HttpError, HttpExecutor, HttpMethod,
    HttpRequest, HttpResponse, ReqwestExecutor, RequestContext, RequestSigner, SignerError,
};

pub use resources::account::{CreateAccountPayload, UpdateAccountPayload};
