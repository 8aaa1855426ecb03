//! Contract error types for the owners module
//!
//! These errors are transport-agnostic; the web layer maps them to HTML
//! problem pages.

use thiserror::Error;

/// Owners module domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OwnerError {
    /// Owner (or other record) not found
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource type (owner, pet)
        resource: String,
        /// Resource identifier
        id: String,
    },
    /// Internal error
    #[error("Internal error")]
    Internal,
}

impl OwnerError {
    pub fn owner_not_found(id: i32) -> Self {
        Self::NotFound {
            resource: "owner".to_string(),
            id: id.to_string(),
        }
    }
}
