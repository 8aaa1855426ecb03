//! Owners Module
//!
//! Clinic owner records for PetClinic: create, search, edit, view and delete
//! owners through server-rendered HTML pages, with their pets listed
//! alongside.

// Public exports
pub mod contract;
pub use contract::{Identity, Named, Owner, OwnerDraft, OwnerError, Page, PageRequest, Pet};

pub mod module;
pub use module::OwnersModule;

pub mod config;
pub use config::Config;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
