//! Pending owner deletions, keyed per browser session
//!
//! The remove page stages a target and the delete endpoint consumes it.
//! Entries belong to one session token so concurrent confirmations from
//! different clients cannot see or overwrite each other.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone, Copy)]
struct PendingDeletion {
    owner_id: i32,
    staged_at: DateTime<Utc>,
}

/// Session-scoped store of owners awaiting deletion
#[derive(Debug)]
pub struct PendingDeletions {
    entries: DashMap<Uuid, PendingDeletion>,
    ttl: chrono::Duration,
}

impl PendingDeletions {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl: chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX),
        }
    }

    /// Record `owner_id` as the session's pending target, replacing any
    /// earlier one
    pub fn stage(&self, session: Uuid, owner_id: i32) {
        self.entries.insert(
            session,
            PendingDeletion {
                owner_id,
                staged_at: Utc::now(),
            },
        );
    }

    /// Remove and return the session's pending target, if it has not expired
    pub fn take(&self, session: Uuid) -> Option<i32> {
        let (_, pending) = self.entries.remove(&session)?;
        if self.is_expired(&pending, Utc::now()) {
            tracing::debug!(%session, owner_id = pending.owner_id, "Pending deletion expired");
            return None;
        }
        Some(pending.owner_id)
    }

    /// Current target for a session without consuming it
    pub fn peek(&self, session: Uuid) -> Option<i32> {
        self.entries.get(&session).map(|p| p.owner_id)
    }

    /// Drop expired entries, returning how many were removed
    pub fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let before = self.entries.len();
        self.entries.retain(|_, pending| !self.is_expired(pending, now));
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn is_expired(&self, pending: &PendingDeletion, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(pending.staged_at) > self.ttl
    }
}
