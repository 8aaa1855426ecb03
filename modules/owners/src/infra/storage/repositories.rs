//! SeaORM repository implementations

use crate::contract::{Owner, Page, PageRequest};
use crate::domain::repository::OwnerRepository;
use anyhow::{Context, Result};
use async_trait::async_trait;
use sea_orm::sea_query::LikeExpr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use std::collections::HashMap;
use std::sync::Arc;

use super::{entity, mapper};

const LIKE_ESCAPE: char = '\\';

/// `LIKE` pattern matching values that start with `prefix` literally
fn prefix_pattern(prefix: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for c in prefix.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    LikeExpr::new(pattern).escape(LIKE_ESCAPE)
}

// ===== Owner Repository =====

pub struct SeaOrmOwnerRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmOwnerRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn pets_by_owner(&self, owner_ids: Vec<i32>) -> Result<HashMap<i32, Vec<entity::pet::Model>>> {
        let mut grouped: HashMap<i32, Vec<entity::pet::Model>> = HashMap::new();
        if owner_ids.is_empty() {
            return Ok(grouped);
        }

        let pets = entity::pet::Entity::find()
            .filter(entity::pet::Column::OwnerId.is_in(owner_ids))
            .order_by_asc(entity::pet::Column::Name)
            .order_by_asc(entity::pet::Column::Id)
            .all(&*self.db)
            .await?;

        for pet in pets {
            grouped.entry(pet.owner_id).or_default().push(pet);
        }
        Ok(grouped)
    }
}

#[async_trait]
impl OwnerRepository for SeaOrmOwnerRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Owner>> {
        let Some(row) = entity::Entity::find_by_id(id).one(&*self.db).await? else {
            return Ok(None);
        };

        let mut pets = self.pets_by_owner(vec![row.id]).await?;
        let owner_pets = pets.remove(&row.id).unwrap_or_default();
        Ok(Some(mapper::owner_from_entity(row, owner_pets)))
    }

    async fn find_by_last_name(&self, last_name: &str, page: PageRequest) -> Result<Page<Owner>> {
        let paginator = entity::Entity::find()
            .filter(entity::Column::LastName.like(prefix_pattern(last_name)))
            .order_by_asc(entity::Column::Id)
            .paginate(&*self.db, page.page_size.max(1));

        let total = paginator.num_items().await?;
        let in_range = page
            .page_index
            .checked_mul(page.page_size.max(1))
            .is_some_and(|offset| offset < total);
        if !in_range {
            return Ok(Page::new(Vec::new(), page, total));
        }
        let rows = paginator.fetch_page(page.page_index).await?;

        let mut pets = self.pets_by_owner(rows.iter().map(|r| r.id).collect()).await?;
        let content = rows
            .into_iter()
            .map(|row| {
                let owner_pets = pets.remove(&row.id).unwrap_or_default();
                mapper::owner_from_entity(row, owner_pets)
            })
            .collect();

        Ok(Page::new(content, page, total))
    }

    async fn save(&self, owner: &Owner) -> Result<Owner> {
        let active: entity::ActiveModel = owner.into();

        let row = match owner.id() {
            None => entity::Entity::insert(active)
                .exec_with_returning(&*self.db)
                .await
                .context("insert owner")?,
            Some(id) => entity::Entity::update(active)
                .exec(&*self.db)
                .await
                .with_context(|| format!("update owner {id}"))?,
        };

        let mut saved = mapper::owner_from_entity(row, Vec::new());
        saved.pets = owner.pets.clone();
        Ok(saved)
    }

    async fn remove_owner(&self, id: i32) -> Result<bool> {
        let txn = self.db.begin().await?;

        entity::pet::Entity::delete_many()
            .filter(entity::pet::Column::OwnerId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(result.rows_affected > 0)
    }
}
