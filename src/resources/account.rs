//! Account resource.
//!
//! An account is identified by an integer ID and has a single attribute,
//! `name`. The client keeps no account state; payloads are built by the
//! caller, serialized, and dropped once the request is sent.
//!
//! # Actions
//!
//! | Action | Method | Path | Body | Signed |
//! |--------|--------|------|------|--------|
//! | create | POST | `/cellar/accounts` | `{"name": ...}` | yes |
//! | show | GET | `/cellar/accounts/{id}` | none | no |
//! | update | PUT | `/cellar/accounts/{id}` | `{"name": ...}` | no |
//! | delete | DELETE | `/cellar/accounts/{id}` | none | no |
//!
//! Each action takes the request path as an argument. The `*_path`
//! functions compute the canonical path for it.
//!
//! # Example
//!
//! ```rust,ignore
//! use cellar_client::resources::account::{show_account_path, update_account_path, UpdateAccountPayload};
//!
//! let response = client.show_account(&ctx, &show_account_path(1)).await?;
//! println!("{}: {}", response.code, response.text());
//!
//! let payload = UpdateAccountPayload::new("Renamed");
//! client.update_account(&ctx, &update_account_path(1), &payload).await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::http_client::Signing;
use crate::clients::{Client, ClientError, HttpMethod, HttpResponse, RequestContext};

/// Collection path for accounts.
pub const ACCOUNTS_PATH: &str = "/cellar/accounts";

/// Payload of the create action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAccountPayload {
    /// Name of account.
    pub name: String,
}

impl CreateAccountPayload {
    /// Creates a payload with the given account name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Payload of the update action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAccountPayload {
    /// Name of account.
    pub name: String,
}

impl UpdateAccountPayload {
    /// Creates a payload with the given account name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Computes the request path of the create action.
#[must_use]
pub fn create_account_path() -> String {
    ACCOUNTS_PATH.to_string()
}

/// Computes the request path of the show action.
#[must_use]
pub fn show_account_path(account_id: i64) -> String {
    format!("{ACCOUNTS_PATH}/{account_id}")
}

/// Computes the request path of the update action.
#[must_use]
pub fn update_account_path(account_id: i64) -> String {
    format!("{ACCOUNTS_PATH}/{account_id}")
}

/// Computes the request path of the delete action.
#[must_use]
pub fn delete_account_path(account_id: i64) -> String {
    format!("{ACCOUNTS_PATH}/{account_id}")
}

impl Client {
    /// Creates a new account.
    ///
    /// The request is signed with the configured signer before dispatch. If
    /// signing fails, the failure is logged and the request is sent anyway.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the payload cannot be serialized, the URL
    /// is invalid, or the executor fails. Non-2xx responses
    /// are returned as `Ok`.
    pub async fn create_account(
        &self,
        ctx: &RequestContext,
        path: &str,
        payload: &CreateAccountPayload,
    ) -> Result<HttpResponse, ClientError> {
        self.send(ctx, HttpMethod::Post, path, Some(payload), Signing::Signed)
            .await
    }

    /// Deletes an account.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the URL is invalid or the executor fails.
    pub async fn delete_account(
        &self,
        ctx: &RequestContext,
        path: &str,
    ) -> Result<HttpResponse, ClientError> {
        self.send::<()>(ctx, HttpMethod::Delete, path, None, Signing::Unsigned)
            .await
    }

    /// Retrieves the account at `path`. IDs 1 and 2 pre-exist on the server.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the URL is invalid or the executor fails.
    pub async fn show_account(
        &self,
        ctx: &RequestContext,
        path: &str,
    ) -> Result<HttpResponse, ClientError> {
        self.send::<()>(ctx, HttpMethod::Get, path, None, Signing::Unsigned)
            .await
    }

    /// Changes an account's name.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the payload cannot be serialized, the URL
    /// is invalid, or the executor fails.
    pub async fn update_account(
        &self,
        ctx: &RequestContext,
        path: &str,
        payload: &UpdateAccountPayload,
    ) -> Result<HttpResponse, ClientError> {
        self.send(ctx, HttpMethod::Put, path, Some(payload), Signing::Unsigned)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_account_path() {
        assert_eq!(create_account_path(), "/cellar/accounts");
    }

    #[test]
    fn test_member_paths_interpolate_id() {
        assert_eq!(show_account_path(42), "/cellar/accounts/42");
        assert_eq!(update_account_path(42), "/cellar/accounts/42");
        assert_eq!(delete_account_path(42), "/cellar/accounts/42");
        assert_eq!(show_account_path(-7), "/cellar/accounts/-7");
    }

    #[test]
    fn test_payloads_serialize_to_name_only() {
        let create = serde_json::to_string(&CreateAccountPayload::new("Wine")).unwrap();
        assert_eq!(create, r#"{"name":"Wine"}"#);

        let update = serde_json::to_string(&UpdateAccountPayload::new("Beer")).unwrap();
        assert_eq!(update, r#"{"name":"Beer"}"#);
    }

    #[test]
    fn test_payload_escapes_name() {
        let json = serde_json::to_string(&CreateAccountPayload::new("a \"quoted\" name")).unwrap();
        assert_eq!(json, r#"{"name":"a \"quoted\" name"}"#);

        let empty = serde_json::to_string(&UpdateAccountPayload::new("")).unwrap();
        assert_eq!(empty, r#"{"name":""}"#);
    }

    #[test]
    fn test_payload_deserializes() {
        let payload: UpdateAccountPayload = serde_json::from_str(r#"{"name":"Cider"}"#).unwrap();
        assert_eq!(payload, UpdateAccountPayload::new("Cider"));
    }
}
