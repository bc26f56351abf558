//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (SQLite, in-memory).

use async_trait::async_trait;

use crate::domain::entities::{
    Application, Guide, NewApplication, Partner, Pet, PetId, Product, Story, Tip,
};
use crate::domain::seed::{Collection, CollectionStatus, SeedCatalog};
use crate::error::DomainError;

/// Read access to the seeded catalog
///
/// Every list returns the whole collection in its display order:
/// pets, stories, tips and products newest first (ties by ascending id),
/// guides by ascending `order_num`, partners by ascending id.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn list_pets(&self) -> Result<Vec<Pet>, DomainError>;

    /// Find a pet by ID
    async fn find_pet(&self, id: PetId) -> Result<Option<Pet>, DomainError>;

    async fn list_stories(&self) -> Result<Vec<Story>, DomainError>;

    async fn list_tips(&self) -> Result<Vec<Tip>, DomainError>;

    async fn list_products(&self) -> Result<Vec<Product>, DomainError>;

    async fn list_guides(&self) -> Result<Vec<Guide>, DomainError>;

    async fn list_partners(&self) -> Result<Vec<Partner>, DomainError>;
}

/// Append-only store for adoption applications
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Record an application, assigning the next id and a timestamp.
    /// Ids are strictly increasing and never reused, even under concurrent calls.
    async fn create(&self, application: &NewApplication) -> Result<Application, DomainError>;
}

/// Seeding hooks used at boot
#[async_trait]
pub trait SeedRepository: Send + Sync {
    /// Inspect a collection to decide whether it needs reseeding
    async fn status(&self, collection: Collection) -> Result<CollectionStatus, DomainError>;

    /// Delete every record in `collection`, insert the canonical records with
    /// ids 1..=n, and stamp `version`. Atomic per collection.
    async fn reseed(
        &self,
        collection: Collection,
        catalog: &SeedCatalog,
        version: i32,
    ) -> Result<(), DomainError>;
}
