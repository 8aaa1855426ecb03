//! Domain service - owner request flow orchestration

use crate::config::Config;
use crate::contract::{Owner, OwnerDraft, OwnerError, PageRequest};
use super::pending::PendingDeletions;
use super::repository::OwnerRepository;
use std::sync::Arc;
use uuid::Uuid;

/// Outcome of an owner search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerSearch {
    /// No owner on the requested page
    NotFound,
    /// Exactly one owner matched overall
    Single(Owner),
    /// Several owners matched; one page of them
    Many(OwnerPage),
}

/// One page of search results, ready for the list view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerPage {
    /// One-based page number
    pub current_page: u64,
    pub total_pages: u64,
    pub total_items: u64,
    pub owners: Vec<Owner>,
}

/// Domain service for owner management
pub struct Service {
    owners: Arc<dyn OwnerRepository>,
    pending: PendingDeletions,
    page_size: u64,
}

impl Service {
    /// Create a new service instance
    pub fn new(owners: Arc<dyn OwnerRepository>, config: &Config) -> Self {
        Self {
            owners,
            pending: PendingDeletions::new(config.pending_delete_ttl),
            page_size: config.page_size.max(1),
        }
    }

    /// Resolve the owner a request works on: a fresh unsaved owner when no
    /// identity is given, otherwise the stored one
    pub async fn resolve_owner(&self, owner_id: Option<i32>) -> Result<Owner, OwnerError> {
        match owner_id {
            None => Ok(Owner::default()),
            Some(id) => self.find_owner(id).await,
        }
    }

    /// Get an owner with pets
    #[tracing::instrument(skip(self))]
    pub async fn find_owner(&self, owner_id: i32) -> Result<Owner, OwnerError> {
        self.owners
            .find_by_id(owner_id)
            .await
            .map_err(internal)?
            .ok_or_else(|| OwnerError::owner_not_found(owner_id))
    }

    /// Persist a new owner, assigning its identity
    #[tracing::instrument(skip(self, draft), fields(last_name = %draft.last_name))]
    pub async fn create_owner(&self, draft: OwnerDraft) -> Result<Owner, OwnerError> {
        let owner = Owner::from_draft(draft);
        let saved = self.owners.save(&owner).await.map_err(internal)?;

        tracing::info!(owner_id = ?saved.id(), "Owner created");
        Ok(saved)
    }

    /// Update an existing owner. The identity always comes from `owner_id`,
    /// never from submitted data.
    #[tracing::instrument(skip(self, draft))]
    pub async fn update_owner(&self, owner_id: i32, draft: OwnerDraft) -> Result<Owner, OwnerError> {
        let mut owner = self.find_owner(owner_id).await?;
        owner.apply(draft);
        owner.identity.set_id(owner_id);

        let saved = self.owners.save(&owner).await.map_err(internal)?;

        tracing::info!(owner_id, "Owner updated");
        Ok(saved)
    }

    /// Search owners by last name prefix.
    ///
    /// A missing last name searches everything. `page` is one-based; values
    /// below 1 are treated as 1.
    #[tracing::instrument(skip(self))]
    pub async fn find_owners(&self, last_name: Option<&str>, page: i64) -> Result<OwnerSearch, OwnerError> {
        let last_name = last_name.unwrap_or_default();
        let current_page = u64::try_from(page).unwrap_or(0).max(1);

        if (current_page - 1).checked_mul(self.page_size).is_none() {
            tracing::debug!(current_page, "Page beyond any result set");
            return Ok(OwnerSearch::NotFound);
        }

        let results = self
            .owners
            .find_by_last_name(last_name, PageRequest::of(current_page - 1, self.page_size))
            .await
            .map_err(internal)?;

        if results.is_empty() {
            tracing::debug!(last_name, current_page, "No owners found");
            return Ok(OwnerSearch::NotFound);
        }

        if results.total_elements == 1 {
            if let Some(owner) = results.content.into_iter().next() {
                return Ok(OwnerSearch::Single(owner));
            }
            return Ok(OwnerSearch::NotFound);
        }

        let total_pages = results.total_pages();
        Ok(OwnerSearch::Many(OwnerPage {
            current_page,
            total_pages,
            total_items: results.total_elements,
            owners: results.content,
        }))
    }

    /// Stage an owner for deletion in the caller's session
    #[tracing::instrument(skip(self))]
    pub async fn stage_owner_removal(&self, session: Uuid, owner_id: i32) -> Result<Owner, OwnerError> {
        let owner = self.find_owner(owner_id).await?;
        self.pending.stage(session, owner_id);

        tracing::debug!(owner_id, "Owner staged for deletion");
        Ok(owner)
    }

    /// Delete the owner staged by this session, if any.
    ///
    /// Returns the deleted identity, or `None` when nothing was staged.
    #[tracing::instrument(skip(self))]
    pub async fn delete_staged_owner(&self, session: Uuid) -> Result<Option<i32>, OwnerError> {
        let Some(owner_id) = self.pending.take(session) else {
            return Ok(None);
        };

        let removed = self.owners.remove_owner(owner_id).await.map_err(internal)?;
        if !removed {
            return Err(OwnerError::owner_not_found(owner_id));
        }

        tracing::info!(owner_id, "Owner deleted");
        Ok(Some(owner_id))
    }

    /// Owner currently staged for deletion by a session
    pub fn staged_owner(&self, session: Uuid) -> Option<i32> {
        self.pending.peek(session)
    }

    /// Drop expired staged deletions
    pub fn purge_expired_removals(&self) -> usize {
        self.pending.purge_expired()
    }
}

fn internal(error: anyhow::Error) -> OwnerError {
    tracing::error!(error = ?error, "Owner repository failure");
    OwnerError::Internal
}
