//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{Owner, Page, PageRequest};
use anyhow::Result;
use async_trait::async_trait;

/// Repository for owners and their pets
#[async_trait]
pub trait OwnerRepository: Send + Sync {
    /// Find an owner, with pets, by identity
    async fn find_by_id(&self, id: i32) -> Result<Option<Owner>>;

    /// Find owners whose last name starts with `last_name`.
    /// The empty string matches every owner.
    async fn find_by_last_name(&self, last_name: &str, page: PageRequest) -> Result<Page<Owner>>;

    /// Insert a new owner or update an existing one, keyed by identity.
    /// Returns the stored owner with its identity assigned.
    async fn save(&self, owner: &Owner) -> Result<Owner>;

    /// Delete an owner and its pets. Returns false when nothing was deleted.
    async fn remove_owner(&self, id: i32) -> Result<bool>;
}
