//! Form and query DTOs for the HTML pages

use crate::domain::validation::{not_blank, telephone};
use crate::domain::{Bindable, DataBinder};
use serde::Deserialize;
use validator::Validate;

/// Field never accepted from submitted forms
pub const IDENTITY_FIELD: &str = "id";

/// Owner form as submitted and redisplayed. Carries no identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct OwnerForm {
    #[validate(custom(function = "not_blank"))]
    pub first_name: String,

    #[validate(custom(function = "not_blank"))]
    pub last_name: String,

    #[validate(custom(function = "not_blank"))]
    pub address: String,

    #[validate(custom(function = "not_blank"))]
    pub city: String,

    #[validate(custom(function = "telephone"))]
    pub telephone: String,
}

/// Owner form fields as (label, input name, error key)
pub const OWNER_FORM_FIELDS: [(&str, &str, &str); 5] = [
    ("First Name", "firstName", "first_name"),
    ("Last Name", "lastName", "last_name"),
    ("Address", "address", "address"),
    ("City", "city", "city"),
    ("Telephone", "telephone", "telephone"),
];

impl OwnerForm {
    /// Current value of a field by input name
    pub fn value(&self, input_name: &str) -> &str {
        match input_name {
            "firstName" => &self.first_name,
            "lastName" => &self.last_name,
            "address" => &self.address,
            "city" => &self.city,
            "telephone" => &self.telephone,
            _ => "",
        }
    }
}

impl Bindable for OwnerForm {
    fn bind_field(&mut self, name: &str, value: String) -> bool {
        match name {
            "firstName" => self.first_name = value,
            "lastName" => self.last_name = value,
            "address" => self.address = value,
            "city" => self.city = value,
            "telephone" => self.telephone = value,
            _ => return false,
        }
        true
    }
}

/// Binder for owner forms: identity is never bound from user input
pub fn owner_binder() -> DataBinder {
    DataBinder::new().disallow(IDENTITY_FIELD)
}

/// Query parameters of the owner search
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FindOwnersQuery {
    /// One-based page number (defaults to 1)
    #[serde(default)]
    pub page: Option<i64>,

    #[serde(default, rename = "lastName")]
    pub last_name: Option<String>,
}
