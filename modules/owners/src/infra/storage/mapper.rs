//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use crate::contract::{Identity, Named, Owner, Pet};
use super::entity;

// ===== Owner Conversions =====

/// Build a contract owner from its row and its pets' rows
pub fn owner_from_entity(entity: entity::Model, pets: Vec<entity::pet::Model>) -> Owner {
    Owner {
        identity: Identity::assigned(entity.id),
        first_name: entity.first_name,
        last_name: entity.last_name,
        address: entity.address,
        city: entity.city,
        telephone: entity.telephone,
        pets: pets.into_iter().map(Pet::from).collect(),
    }
}

impl From<&Owner> for entity::ActiveModel {
    fn from(model: &Owner) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: match model.id() {
                Some(id) => Set(id),
                None => NotSet,
            },
            first_name: Set(model.first_name.clone()),
            last_name: Set(model.last_name.clone()),
            address: Set(model.address.clone()),
            city: Set(model.city.clone()),
            telephone: Set(model.telephone.clone()),
        }
    }
}

// ===== Pet Conversions =====

impl From<entity::pet::Model> for Pet {
    fn from(entity: entity::pet::Model) -> Self {
        Self {
            identity: Identity::assigned(entity.id),
            named: Named { name: entity.name },
            birth_date: entity.birth_date,
            kind: entity.kind,
        }
    }
}

/// Active model for inserting a pet under `owner_id`
pub fn pet_to_active(pet: &Pet, owner_id: i32) -> entity::pet::ActiveModel {
    use sea_orm::ActiveValue::*;

    entity::pet::ActiveModel {
        id: match pet.id() {
            Some(id) => Set(id),
            None => NotSet,
        },
        name: Set(pet.named.name.clone()),
        birth_date: Set(pet.birth_date),
        kind: Set(pet.kind.clone()),
        owner_id: Set(owner_id),
    }
}
