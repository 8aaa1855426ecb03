//! Domain layer - business logic and services

pub mod binding;
pub mod pending;
pub mod repository;
pub mod service;
pub mod validation;

pub use binding::{Bindable, BindingResult, DataBinder, FieldError, FieldErrors};
pub use pending::PendingDeletions;
pub use repository::OwnerRepository;
pub use service::{OwnerPage, OwnerSearch, Service};
