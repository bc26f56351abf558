//! Store bootstrap
//!
//! Picks the configured store, seeds it, and degrades to the volatile store
//! when the SQLite file cannot be opened or seeded. Never fails the boot for
//! a durable-store problem.

use std::path::Path;
use std::sync::Arc;

use crate::adapters::{InMemoryStore, Repositories, SqliteStore};
use crate::app::SeedService;
use crate::config::{Config, StorageBackend};
use crate::error::DomainError;

/// Build and seed the repositories for this process
pub async fn bootstrap(config: &Config) -> Result<Repositories, DomainError> {
    if config.storage == StorageBackend::Sqlite {
        match open_durable(&config.database_path).await {
            Ok(repositories) => return Ok(repositories),
            Err(e) => {
                tracing::warn!(
                    "Failed to open database at {}, falling back to in-memory store: {}",
                    config.database_path.display(),
                    e
                );
            }
        }
    }

    let repositories = Repositories::from_store(Arc::new(InMemoryStore::new()));
    seed(&repositories).await?;
    tracing::info!("Using in-memory store; applications are lost on restart");

    Ok(repositories)
}

async fn open_durable(path: &Path) -> Result<Repositories, DomainError> {
    let store = SqliteStore::open(path).await?;
    let repositories = Repositories::from_store(Arc::new(store));
    seed(&repositories).await?;
    Ok(repositories)
}

async fn seed(repositories: &Repositories) -> Result<(), DomainError> {
    let report = SeedService::new(repositories.seeds.clone())
        .seed_all()
        .await?;

    if report.is_noop() {
        tracing::info!("Catalog is current, nothing to seed");
    }
    Ok(())
}
