//! Seed service
//!
//! Brings every catalog collection to the canonical baseline at boot.
//! A collection is replaced wholesale when it is empty, carries an outdated
//! seed version, or still references the legacy placeholder image host.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::ports::SeedRepository;
use crate::domain::seed::{Collection, ReseedReason, SeedCatalog, SEED_VERSION};
use crate::error::DomainError;

/// Which collections a seeding pass replaced, and why
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub reseeded: Vec<(Collection, ReseedReason)>,
}

impl SeedReport {
    pub fn is_noop(&self) -> bool {
        self.reseeded.is_empty()
    }

    #[cfg(test)]
    pub fn reason(&self, collection: Collection) -> Option<ReseedReason> {
        self.reseeded
            .iter()
            .find(|(c, _)| *c == collection)
            .map(|(_, reason)| *reason)
    }
}

/// Service for seeding a store
pub struct SeedService<SR>
where
    SR: SeedRepository + ?Sized,
{
    seeds: Arc<SR>,
    catalog: SeedCatalog,
    version: i32,
}

impl<SR> SeedService<SR>
where
    SR: SeedRepository + ?Sized,
{
    /// Seed with the canonical catalog at the current seed version
    pub fn new(seeds: Arc<SR>) -> Self {
        Self {
            seeds,
            catalog: SeedCatalog::canonical(),
            version: SEED_VERSION,
        }
    }

    /// Seed with a different catalog or version
    #[cfg(test)]
    pub fn with_catalog(mut self, catalog: SeedCatalog, version: i32) -> Self {
        self.catalog = catalog;
        self.version = version;
        self
    }

    /// Check every collection and replace the ones that need it
    pub async fn seed_all(&self) -> Result<SeedReport, DomainError> {
        let mut report = SeedReport::default();

        for collection in Collection::ALL {
            if let Some(reason) = self.seed_collection(collection).await? {
                report.reseeded.push((collection, reason));
            }
        }

        Ok(report)
    }

    /// Reseed one collection if required, returning the reason it was replaced
    pub async fn seed_collection(
        &self,
        collection: Collection,
    ) -> Result<Option<ReseedReason>, DomainError> {
        let status = self.seeds.status(collection).await?;

        let Some(reason) = status.reseed_reason(self.version) else {
            tracing::debug!(
                "Keeping {} ({} rows, seed version {})",
                collection,
                status.count,
                self.version
            );
            return Ok(None);
        };

        tracing::info!(
            "Reseeding {} ({}): {} rows -> {} rows",
            collection,
            reason,
            status.count,
            self.catalog.len(collection)
        );
        self.seeds
            .reseed(collection, &self.catalog, self.version)
            .await?;

        Ok(Some(reason))
    }
}
