//! Contract models for the owners module
//!
//! These models are transport-agnostic and shared by the domain, storage and
//! web layers. NO serde derives - these are pure domain models.

use chrono::NaiveDate;
use std::fmt;

/// Identity component shared by every persisted record.
///
/// The id stays empty until the persistence engine assigns one on the first
/// successful save.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Identity {
    id: Option<i32>,
}

impl Identity {
    /// A fresh, unsaved identity
    pub fn new() -> Self {
        Self::default()
    }

    /// An identity already assigned by storage
    pub fn assigned(id: i32) -> Self {
        Self { id: Some(id) }
    }

    pub fn id(&self) -> Option<i32> {
        self.id
    }

    /// Overwrite the identity. Only the edit flow does this, to pin a record
    /// to the identity taken from the request path.
    pub fn set_id(&mut self, id: i32) {
        self.id = Some(id);
    }

    /// True iff no identity has been assigned yet
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}

/// Naming component for records that carry a display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Named {
    pub name: Option<String>,
}

impl Named {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl fmt::Display for Named {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or_default())
    }
}

/// Clinic owner as persisted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Owner {
    pub identity: Identity,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
    /// Pets belonging to this owner (read-only from the owner's perspective)
    pub pets: Vec<Pet>,
}

impl Owner {
    /// Build an unsaved owner from editable data
    pub fn from_draft(draft: OwnerDraft) -> Self {
        Self {
            identity: Identity::new(),
            first_name: draft.first_name,
            last_name: draft.last_name,
            address: draft.address,
            city: draft.city,
            telephone: draft.telephone,
            pets: Vec::new(),
        }
    }

    pub fn id(&self) -> Option<i32> {
        self.identity.id()
    }

    pub fn is_new(&self) -> bool {
        self.identity.is_new()
    }

    /// Replace the editable fields, keeping identity and pets
    pub fn apply(&mut self, draft: OwnerDraft) {
        self.first_name = draft.first_name;
        self.last_name = draft.last_name;
        self.address = draft.address;
        self.city = draft.city;
        self.telephone = draft.telephone;
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Editable owner data, without identity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnerDraft {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
}

/// Pet belonging to an owner
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pet {
    pub identity: Identity,
    pub named: Named,
    pub birth_date: Option<NaiveDate>,
    /// Pet type name (cat, dog, ...)
    pub kind: String,
}

impl Pet {
    pub fn id(&self) -> Option<i32> {
        self.identity.id()
    }

    pub fn is_new(&self) -> bool {
        self.identity.is_new()
    }
}

/// Zero-based page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_index: u64,
    pub page_size: u64,
}

impl PageRequest {
    pub fn of(page_index: u64, page_size: u64) -> Self {
        Self {
            page_index,
            page_size,
        }
    }

    pub fn offset(&self) -> u64 {
        self.page_index.saturating_mul(self.page_size)
    }
}

/// Bounded slice of a larger result set plus the metadata needed to paginate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub request: PageRequest,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            request,
            total_elements,
        }
    }

    /// True when this page holds no records, regardless of the total
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn total_pages(&self) -> u64 {
        if self.request.page_size == 0 {
            return 1;
        }
        self.total_elements.div_ceil(self.request.page_size)
    }
}
