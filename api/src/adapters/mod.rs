//! Adapters layer
//!
//! Implementations of port traits for the two storage backends.

pub mod memory;
pub mod sqlite;

use std::sync::Arc;

use crate::domain::ports::{ApplicationRepository, CatalogRepository, SeedRepository};

pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;

/// One store, viewed through each port it implements
#[derive(Clone)]
pub struct Repositories {
    pub catalog: Arc<dyn CatalogRepository>,
    pub applications: Arc<dyn ApplicationRepository>,
    pub seeds: Arc<dyn SeedRepository>,
}

impl Repositories {
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: CatalogRepository + ApplicationRepository + SeedRepository + 'static,
    {
        Self {
            catalog: store.clone(),
            applications: store.clone(),
            seeds: store,
        }
    }
}
