//! SQLite adapter for CatalogRepository

use async_trait::async_trait;
use sea_orm::{EntityTrait, QueryOrder};

use super::{db_err, SqliteStore};
use crate::domain::entities::{Guide, Partner, Pet, PetId, Product, Story, Tip};
use crate::domain::ports::CatalogRepository;
use crate::entity::{guides, partners, pets, products, stories, tips};
use crate::error::DomainError;

#[async_trait]
impl CatalogRepository for SqliteStore {
    async fn list_pets(&self) -> Result<Vec<Pet>, DomainError> {
        let results = pets::Entity::find()
            .order_by_desc(pets::Column::CreatedAt)
            .order_by_asc(pets::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_pet(&self, id: PetId) -> Result<Option<Pet>, DomainError> {
        let result = pets::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.map(|m| m.into()))
    }

    async fn list_stories(&self) -> Result<Vec<Story>, DomainError> {
        let results = stories::Entity::find()
            .order_by_desc(stories::Column::CreatedAt)
            .order_by_asc(stories::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn list_tips(&self) -> Result<Vec<Tip>, DomainError> {
        let results = tips::Entity::find()
            .order_by_desc(tips::Column::CreatedAt)
            .order_by_asc(tips::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn list_products(&self) -> Result<Vec<Product>, DomainError> {
        let results = products::Entity::find()
            .order_by_desc(products::Column::CreatedAt)
            .order_by_asc(products::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn list_guides(&self) -> Result<Vec<Guide>, DomainError> {
        let results = guides::Entity::find()
            .order_by_asc(guides::Column::OrderNum)
            .order_by_asc(guides::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn list_partners(&self) -> Result<Vec<Partner>, DomainError> {
        let results = partners::Entity::find()
            .order_by_asc(partners::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

/// Convert SeaORM model to domain entity
impl From<pets::Model> for Pet {
    fn from(model: pets::Model) -> Self {
        Pet {
            id: PetId(model.id),
            name: model.name,
            species: model.species,
            breed: model.breed,
            age: model.age,
            gender: model.gender,
            description: model.description,
            image_url: model.image_url,
            status: model.status.parse().unwrap_or_default(),
            created_at: model.created_at,
        }
    }
}

impl From<stories::Model> for Story {
    fn from(model: stories::Model) -> Self {
        Story {
            id: model.id,
            title: model.title,
            content: model.content,
            pet_name: model.pet_name,
            image_url: model.image_url,
            created_at: model.created_at,
        }
    }
}

impl From<tips::Model> for Tip {
    fn from(model: tips::Model) -> Self {
        Tip {
            id: model.id,
            category: model.category,
            title: model.title,
            content: model.content,
            image_url: model.image_url,
            created_at: model.created_at,
        }
    }
}

impl From<products::Model> for Product {
    fn from(model: products::Model) -> Self {
        Product {
            id: model.id,
            name: model.name,
            price: model.price,
            description: model.description,
            image_url: model.image_url,
            category: model.category,
            created_at: model.created_at,
        }
    }
}

impl From<guides::Model> for Guide {
    fn from(model: guides::Model) -> Self {
        Guide {
            id: model.id,
            title: model.title,
            content: model.content,
            icon: model.icon,
            order_num: model.order_num,
        }
    }
}

impl From<partners::Model> for Partner {
    fn from(model: partners::Model) -> Self {
        Partner {
            id: model.id,
            name: model.name,
            logo_url: model.logo_url,
            description: model.description,
            website: model.website,
        }
    }
}
