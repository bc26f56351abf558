//! Catalog service
//!
//! Read-only access to the seeded collections. Filtering (e.g. by species)
//! is left to the client, which always receives whole collections.

use std::sync::Arc;

use crate::domain::entities::{Guide, Partner, Pet, PetId, Product, Story, Tip};
use crate::domain::ports::CatalogRepository;
use crate::error::AppError;

/// Service for browsing the catalog
pub struct CatalogService<CR>
where
    CR: CatalogRepository + ?Sized,
{
    catalog: Arc<CR>,
}

impl<CR> CatalogService<CR>
where
    CR: CatalogRepository + ?Sized,
{
    pub fn new(catalog: Arc<CR>) -> Self {
        Self { catalog }
    }

    pub async fn list_pets(&self) -> Result<Vec<Pet>, AppError> {
        Ok(self.catalog.list_pets().await?)
    }

    /// Get a single pet, or `NotFound`
    pub async fn get_pet(&self, id: PetId) -> Result<Pet, AppError> {
        self.catalog
            .find_pet(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Pet {} not found", id)))
    }

    pub async fn list_stories(&self) -> Result<Vec<Story>, AppError> {
        Ok(self.catalog.list_stories().await?)
    }

    pub async fn list_tips(&self) -> Result<Vec<Tip>, AppError> {
        Ok(self.catalog.list_tips().await?)
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, AppError> {
        Ok(self.catalog.list_products().await?)
    }

    pub async fn list_guides(&self) -> Result<Vec<Guide>, AppError> {
        Ok(self.catalog.list_guides().await?)
    }

    pub async fn list_partners(&self) -> Result<Vec<Partner>, AppError> {
        Ok(self.catalog.list_partners().await?)
    }
}
