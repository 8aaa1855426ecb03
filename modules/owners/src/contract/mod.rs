//! Contract layer - transport-agnostic models and errors
//!
//! NO serde derives on models - these are pure domain types.

pub mod error;
pub mod model;

pub use error::OwnerError;
pub use model::{Identity, Named, Owner, OwnerDraft, Page, PageRequest, Pet};
