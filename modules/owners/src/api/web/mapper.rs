//! Mapper implementations between form DTOs and contract models
//!
//! Forms never carry identity; it is attached by the service from the
//! request path.

use super::dto::OwnerForm;
use crate::contract::{Owner, OwnerDraft};

impl From<&Owner> for OwnerForm {
    fn from(owner: &Owner) -> Self {
        Self {
            first_name: owner.first_name.clone(),
            last_name: owner.last_name.clone(),
            address: owner.address.clone(),
            city: owner.city.clone(),
            telephone: owner.telephone.clone(),
        }
    }
}

impl From<OwnerForm> for OwnerDraft {
    fn from(form: OwnerForm) -> Self {
        Self {
            first_name: form.first_name,
            last_name: form.last_name,
            address: form.address,
            city: form.city,
            telephone: form.telephone,
        }
    }
}
