//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// Owners table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "owners")]
pub struct Model {
    /// Identity, assigned by the database on insert
    #[sea_orm(primary_key)]
    pub id: i32,

    pub first_name: String,

    pub last_name: String,

    pub address: String,

    pub city: String,

    pub telephone: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One-to-many relationship with pets
    #[sea_orm(has_many = "pet::Entity")]
    Pets,
}

impl Related<pet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Pets module
pub mod pet {
    use sea_orm::entity::prelude::*;

    /// Pets table entity
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "pets")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,

        pub name: Option<String>,

        pub birth_date: Option<Date>,

        /// Pet type name
        pub kind: String,

        pub owner_id: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// Foreign key to owners
        #[sea_orm(
            belongs_to = "super::Entity",
            from = "Column::OwnerId",
            to = "super::Column::Id"
        )]
        Owner,
    }

    impl Related<super::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Owner.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
