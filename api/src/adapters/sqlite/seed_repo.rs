//! SQLite adapter for SeedRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseTransaction, EntityTrait, PaginatorTrait, QueryFilter, Set,
    TransactionTrait,
};

use super::{db_err, SqliteStore};
use crate::domain::entities::PetStatus;
use crate::domain::ports::SeedRepository;
use crate::domain::seed::{Collection, CollectionStatus, SeedCatalog, PLACEHOLDER_IMAGE_HOST};
use crate::entity::{guides, partners, pets, products, seed_versions, stories, tips};
use crate::error::DomainError;

#[async_trait]
impl SeedRepository for SqliteStore {
    async fn status(&self, collection: Collection) -> Result<CollectionStatus, DomainError> {
        let db = &self.db;

        let (count, placeholders) = match collection {
            Collection::Pets => (
                pets::Entity::find().count(db).await,
                pets::Entity::find()
                    .filter(pets::Column::ImageUrl.contains(PLACEHOLDER_IMAGE_HOST))
                    .count(db)
                    .await,
            ),
            Collection::Stories => (
                stories::Entity::find().count(db).await,
                stories::Entity::find()
                    .filter(stories::Column::ImageUrl.contains(PLACEHOLDER_IMAGE_HOST))
                    .count(db)
                    .await,
            ),
            Collection::Tips => (
                tips::Entity::find().count(db).await,
                tips::Entity::find()
                    .filter(tips::Column::ImageUrl.contains(PLACEHOLDER_IMAGE_HOST))
                    .count(db)
                    .await,
            ),
            Collection::Products => (
                products::Entity::find().count(db).await,
                products::Entity::find()
                    .filter(products::Column::ImageUrl.contains(PLACEHOLDER_IMAGE_HOST))
                    .count(db)
                    .await,
            ),
            // Guides carry no image reference
            Collection::Guides => (guides::Entity::find().count(db).await, Ok(0)),
            Collection::Partners => (
                partners::Entity::find().count(db).await,
                partners::Entity::find()
                    .filter(partners::Column::LogoUrl.contains(PLACEHOLDER_IMAGE_HOST))
                    .count(db)
                    .await,
            ),
        };

        let seed_version = seed_versions::Entity::find_by_id(collection.as_str().to_string())
            .one(db)
            .await
            .map_err(db_err)?
            .map(|row| row.version);

        Ok(CollectionStatus {
            count: count.map_err(db_err)?,
            has_placeholder_images: placeholders.map_err(db_err)? > 0,
            seed_version,
        })
    }

    async fn reseed(
        &self,
        collection: Collection,
        catalog: &SeedCatalog,
        version: i32,
    ) -> Result<(), DomainError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        replace_rows(&txn, collection, catalog).await?;

        let stamp = seed_versions::ActiveModel {
            collection: Set(collection.as_str().to_string()),
            version: Set(version),
        };
        seed_versions::Entity::insert(stamp)
            .on_conflict(
                OnConflict::column(seed_versions::Column::Collection)
                    .update_column(seed_versions::Column::Version)
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await
            .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;
        Ok(())
    }
}

/// Clear `collection` and insert the canonical rows with ids 1..=n
async fn replace_rows(
    txn: &DatabaseTransaction,
    collection: Collection,
    catalog: &SeedCatalog,
) -> Result<(), DomainError> {
    let now = Utc::now();

    match collection {
        Collection::Pets => {
            pets::Entity::delete_many()
                .exec(txn)
                .await
                .map_err(db_err)?;

            let rows: Vec<pets::ActiveModel> = catalog
                .pets
                .iter()
                .zip(1_i64..)
                .map(|(pet, id)| pets::ActiveModel {
                    id: Set(id),
                    name: Set(pet.name.clone()),
                    species: Set(pet.species.clone()),
                    breed: Set(pet.breed.clone()),
                    age: Set(pet.age.clone()),
                    gender: Set(pet.gender.clone()),
                    description: Set(pet.description.clone()),
                    image_url: Set(pet.image_url.clone()),
                    status: Set(PetStatus::Available.to_string()),
                    created_at: Set(now),
                })
                .collect();
            if !rows.is_empty() {
                pets::Entity::insert_many(rows)
                    .exec_without_returning(txn)
                    .await
                    .map_err(db_err)?;
            }
        }
        Collection::Stories => {
            stories::Entity::delete_many()
                .exec(txn)
                .await
                .map_err(db_err)?;

            let rows: Vec<stories::ActiveModel> = catalog
                .stories
                .iter()
                .zip(1_i64..)
                .map(|(story, id)| stories::ActiveModel {
                    id: Set(id),
                    title: Set(story.title.clone()),
                    content: Set(story.content.clone()),
                    pet_name: Set(story.pet_name.clone()),
                    image_url: Set(story.image_url.clone()),
                    created_at: Set(now),
                })
                .collect();
            if !rows.is_empty() {
                stories::Entity::insert_many(rows)
                    .exec_without_returning(txn)
                    .await
                    .map_err(db_err)?;
            }
        }
        Collection::Tips => {
            tips::Entity::delete_many()
                .exec(txn)
                .await
                .map_err(db_err)?;

            let rows: Vec<tips::ActiveModel> = catalog
                .tips
                .iter()
                .zip(1_i64..)
                .map(|(tip, id)| tips::ActiveModel {
                    id: Set(id),
                    category: Set(tip.category.clone()),
                    title: Set(tip.title.clone()),
                    content: Set(tip.content.clone()),
                    image_url: Set(tip.image_url.clone()),
                    created_at: Set(now),
                })
                .collect();
            if !rows.is_empty() {
                tips::Entity::insert_many(rows)
                    .exec_without_returning(txn)
                    .await
                    .map_err(db_err)?;
            }
        }
        Collection::Products => {
            products::Entity::delete_many()
                .exec(txn)
                .await
                .map_err(db_err)?;

            let rows: Vec<products::ActiveModel> = catalog
                .products
                .iter()
                .zip(1_i64..)
                .map(|(product, id)| products::ActiveModel {
                    id: Set(id),
                    name: Set(product.name.clone()),
                    price: Set(product.price),
                    description: Set(product.description.clone()),
                    image_url: Set(product.image_url.clone()),
                    category: Set(product.category.clone()),
                    created_at: Set(now),
                })
                .collect();
            if !rows.is_empty() {
                products::Entity::insert_many(rows)
                    .exec_without_returning(txn)
                    .await
                    .map_err(db_err)?;
            }
        }
        Collection::Guides => {
            guides::Entity::delete_many()
                .exec(txn)
                .await
                .map_err(db_err)?;

            let rows: Vec<guides::ActiveModel> = catalog
                .guides
                .iter()
                .zip(1_i64..)
                .map(|(guide, id)| guides::ActiveModel {
                    id: Set(id),
                    title: Set(guide.title.clone()),
                    content: Set(guide.content.clone()),
                    icon: Set(guide.icon.clone()),
                    order_num: Set(guide.order_num),
                })
                .collect();
            if !rows.is_empty() {
                guides::Entity::insert_many(rows)
                    .exec_without_returning(txn)
                    .await
                    .map_err(db_err)?;
            }
        }
        Collection::Partners => {
            partners::Entity::delete_many()
                .exec(txn)
                .await
                .map_err(db_err)?;

            let rows: Vec<partners::ActiveModel> = catalog
                .partners
                .iter()
                .zip(1_i64..)
                .map(|(partner, id)| partners::ActiveModel {
                    id: Set(id),
                    name: Set(partner.name.clone()),
                    logo_url: Set(partner.logo_url.clone()),
                    description: Set(partner.description.clone()),
                    website: Set(partner.website.clone()),
                })
                .collect();
            if !rows.is_empty() {
                partners::Entity::insert_many(rows)
                    .exec_without_returning(txn)
                    .await
                    .map_err(db_err)?;
            }
        }
    }

    Ok(())
}
