//! Resource actions of the cellar API.
//!
//! Each resource module defines its payload types and path helpers, and
//! adds its actions as methods on [`Client`](crate::Client).

pub mod account;

pub use account::{
    create_account_path, delete_account_path, show_account_path, update_account_path,
    CreateAccountPayload, UpdateAccountPayload, ACCOUNTS_PATH,
};
