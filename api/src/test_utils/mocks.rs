//! Mock implementations of port traits

use async_trait::async_trait;

use crate::domain::entities::{
    Application, Guide, NewApplication, Partner, Pet, PetId, Product, Story, Tip,
};
use crate::domain::ports::{ApplicationRepository, CatalogRepository, SeedRepository};
use crate::domain::seed::{Collection, CollectionStatus, SeedCatalog};
use crate::error::DomainError;

// ============================================================================
// Unavailable Store
// ============================================================================

/// A store whose every operation fails as if the database had gone away
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStore;

fn unavailable() -> DomainError {
    DomainError::Database("database is locked".to_string())
}

#[async_trait]
impl CatalogRepository for UnavailableStore {
    async fn list_pets(&self) -> Result<Vec<Pet>, DomainError> {
        Err(unavailable())
    }

    async fn find_pet(&self, _id: PetId) -> Result<Option<Pet>, DomainError> {
        Err(unavailable())
    }

    async fn list_stories(&self) -> Result<Vec<Story>, DomainError> {
        Err(unavailable())
    }

    async fn list_tips(&self) -> Result<Vec<Tip>, DomainError> {
        Err(unavailable())
    }

    async fn list_products(&self) -> Result<Vec<Product>, DomainError> {
        Err(unavailable())
    }

    async fn list_guides(&self) -> Result<Vec<Guide>, DomainError> {
        Err(unavailable())
    }

    async fn list_partners(&self) -> Result<Vec<Partner>, DomainError> {
        Err(unavailable())
    }
}

#[async_trait]
impl ApplicationRepository for UnavailableStore {
    async fn create(&self, _application: &NewApplication) -> Result<Application, DomainError> {
        Err(unavailable())
    }
}

#[async_trait]
impl SeedRepository for UnavailableStore {
    async fn status(&self, _collection: Collection) -> Result<CollectionStatus, DomainError> {
        Err(unavailable())
    }

    async fn reseed(
        &self,
        _collection: Collection,
        _catalog: &SeedCatalog,
        _version: i32,
    ) -> Result<(), DomainError> {
        Err(unavailable())
    }
}
