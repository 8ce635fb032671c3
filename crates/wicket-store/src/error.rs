//! Credential store error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("User '{0}' already exists")]
    DuplicateUser(String),

    #[error("Failed to write credential file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize credentials: {0}")]
    Serialize(#[from] serde_json::Error),
}
