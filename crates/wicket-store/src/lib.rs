//! Wicket Credential Store
//!
//! This crate persists the username to password-hash mapping as a single
//! pretty-printed JSON document on disk. The whole map is loaded per
//! operation and rewritten in full on every mutation.

pub mod error;
pub mod store;

pub use error::StoreError;
pub use store::{CredentialMap, UserStore};
