//! Sample owners and pets for demo databases

use crate::contract::{Named, Owner, OwnerDraft, Pet};
use anyhow::Result;
use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};

use super::{entity, mapper};

struct SampleOwner {
    first_name: &'static str,
    last_name: &'static str,
    address: &'static str,
    city: &'static str,
    telephone: &'static str,
    pets: &'static [(&'static str, (i32, u32, u32), &'static str)],
}

const SAMPLE_OWNERS: &[SampleOwner] = &[
    SampleOwner { first_name: "George", last_name: "Franklin", address: "110 W. Liberty St.", city: "Madison", telephone: "6085551023", pets: &[("Leo", (2010, 9, 7), "cat")] },
    SampleOwner { first_name: "Betty", last_name: "Davis", address: "638 Cardinal Ave.", city: "Sun Prairie", telephone: "6085551749", pets: &[("Basil", (2012, 8, 6), "hamster")] },
    SampleOwner { first_name: "Eduardo", last_name: "Rodriquez", address: "2693 Commerce St.", city: "McFarland", telephone: "6085558763", pets: &[("Rosy", (2011, 4, 17), "dog"), ("Jewel", (2010, 3, 7), "dog")] },
    SampleOwner { first_name: "Harold", last_name: "Davis", address: "563 Friendly St.", city: "Windsor", telephone: "6085553198", pets: &[("Iggy", (2010, 11, 30), "lizard")] },
    SampleOwner { first_name: "Peter", last_name: "McTavish", address: "2387 S. Fair Way", city: "Madison", telephone: "6085552765", pets: &[("George", (2010, 1, 20), "snake")] },
    SampleOwner { first_name: "Jean", last_name: "Coleman", address: "105 N. Lake St.", city: "Monona", telephone: "6085552654", pets: &[("Samantha", (2012, 9, 4), "cat"), ("Max", (2012, 9, 4), "cat")] },
    SampleOwner { first_name: "Jeff", last_name: "Black", address: "1450 Oak Blvd.", city: "Monona", telephone: "6085555387", pets: &[("Lucky", (2011, 8, 6), "bird")] },
    SampleOwner { first_name: "Maria", last_name: "Escobito", address: "345 Maple St.", city: "Madison", telephone: "6085557683", pets: &[("Mulligan", (2007, 2, 24), "dog")] },
    SampleOwner { first_name: "David", last_name: "Schroeder", address: "2749 Blackhawk Trail", city: "Madison", telephone: "6085559435", pets: &[("Freddy", (2010, 3, 9), "bird")] },
    SampleOwner { first_name: "Carlos", last_name: "Estaban", address: "2335 Independence La.", city: "Waunakee", telephone: "6085555487", pets: &[("Lucky", (2010, 6, 24), "dog"), ("Sly", (2012, 6, 8), "cat")] },
];

/// Insert the sample data unless the owners table already has rows.
///
/// Returns the number of owners inserted.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<usize> {
    let existing = entity::Entity::find().count(db).await?;
    if existing > 0 {
        tracing::debug!(existing, "Owners table not empty, skipping demo data");
        return Ok(0);
    }

    for sample in SAMPLE_OWNERS {
        let owner = Owner::from_draft(OwnerDraft {
            first_name: sample.first_name.to_string(),
            last_name: sample.last_name.to_string(),
            address: sample.address.to_string(),
            city: sample.city.to_string(),
            telephone: sample.telephone.to_string(),
        });
        let active: entity::ActiveModel = (&owner).into();
        let row = entity::Entity::insert(active).exec_with_returning(db).await?;

        for (name, (y, m, d), kind) in sample.pets {
            let pet = Pet {
                named: Named::new(*name),
                birth_date: NaiveDate::from_ymd_opt(*y, *m, *d),
                kind: kind.to_string(),
                ..Default::default()
            };
            entity::pet::Entity::insert(mapper::pet_to_active(&pet, row.id))
                .exec(db)
                .await?;
        }
    }

    tracing::info!(owners = SAMPLE_OWNERS.len(), "Demo data inserted");
    Ok(SAMPLE_OWNERS.len())
}
