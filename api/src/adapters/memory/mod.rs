//! In-memory adapters
//!
//! The volatile store: catalog and applications live in process memory and
//! reset on restart. Used when configured, and as the fallback when the
//! SQLite file cannot be opened.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::entities::{
    Application, ApplicationId, Guide, NewApplication, Partner, Pet, PetId, Product, Story, Tip,
};
use crate::domain::ports::{ApplicationRepository, CatalogRepository, SeedRepository};
use crate::domain::seed::{Collection, CollectionStatus, SeedCatalog, PLACEHOLDER_IMAGE_HOST};
use crate::error::DomainError;

#[derive(Debug, Default)]
struct CatalogTables {
    pets: Vec<Pet>,
    stories: Vec<Story>,
    tips: Vec<Tip>,
    products: Vec<Product>,
    guides: Vec<Guide>,
    partners: Vec<Partner>,
    seed_versions: HashMap<Collection, i32>,
}

/// Volatile implementation of the catalog, application and seed ports
#[derive(Debug, Default)]
pub struct InMemoryStore {
    catalog: RwLock<CatalogTables>,
    /// Id assignment and append happen under this one lock
    applications: Mutex<Vec<Application>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the pet collection, bypassing seeding
    #[cfg(test)]
    pub fn with_pet(self, pet: Pet) -> Self {
        if let Ok(mut tables) = self.catalog.write() {
            tables.pets.push(pet);
        }
        self
    }

    /// Number of applications recorded so far
    #[cfg(test)]
    pub fn application_count(&self) -> usize {
        self.applications.lock().map(|a| a.len()).unwrap_or(0)
    }

    fn read_catalog(&self) -> Result<RwLockReadGuard<'_, CatalogTables>, DomainError> {
        self.catalog
            .read()
            .map_err(|_| DomainError::Internal("catalog lock poisoned".to_string()))
    }

    fn write_catalog(&self) -> Result<RwLockWriteGuard<'_, CatalogTables>, DomainError> {
        self.catalog
            .write()
            .map_err(|_| DomainError::Internal("catalog lock poisoned".to_string()))
    }

    fn lock_applications(&self) -> Result<MutexGuard<'_, Vec<Application>>, DomainError> {
        self.applications
            .lock()
            .map_err(|_| DomainError::Internal("applications lock poisoned".to_string()))
    }
}

#[async_trait]
impl CatalogRepository for InMemoryStore {
    async fn list_pets(&self) -> Result<Vec<Pet>, DomainError> {
        let mut pets = self.read_catalog()?.pets.clone();
        pets.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(pets)
    }

    async fn find_pet(&self, id: PetId) -> Result<Option<Pet>, DomainError> {
        let tables = self.read_catalog()?;
        Ok(tables.pets.iter().find(|p| p.id == id).cloned())
    }

    async fn list_stories(&self) -> Result<Vec<Story>, DomainError> {
        let mut stories = self.read_catalog()?.stories.clone();
        stories.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(stories)
    }

    async fn list_tips(&self) -> Result<Vec<Tip>, DomainError> {
        let mut tips = self.read_catalog()?.tips.clone();
        tips.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(tips)
    }

    async fn list_products(&self) -> Result<Vec<Product>, DomainError> {
        let mut products = self.read_catalog()?.products.clone();
        products.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(products)
    }

    async fn list_guides(&self) -> Result<Vec<Guide>, DomainError> {
        let mut guides = self.read_catalog()?.guides.clone();
        guides.sort_by(|a, b| a.order_num.cmp(&b.order_num).then(a.id.cmp(&b.id)));
        Ok(guides)
    }

    async fn list_partners(&self) -> Result<Vec<Partner>, DomainError> {
        let mut partners = self.read_catalog()?.partners.clone();
        partners.sort_by_key(|p| p.id);
        Ok(partners)
    }
}

#[async_trait]
impl ApplicationRepository for InMemoryStore {
    async fn create(&self, application: &NewApplication) -> Result<Application, DomainError> {
        let mut applications = self.lock_applications()?;

        let next_id = applications.last().map(|a| a.id.0 + 1).unwrap_or(1);
        let application = application
            .clone()
            .into_application(ApplicationId(next_id), Utc::now());
        applications.push(application.clone());

        Ok(application)
    }
}

#[async_trait]
impl SeedRepository for InMemoryStore {
    async fn status(&self, collection: Collection) -> Result<CollectionStatus, DomainError> {
        let tables = self.read_catalog()?;
        let stale = |url: &String| url.contains(PLACEHOLDER_IMAGE_HOST);

        let (count, has_placeholder_images) = match collection {
            Collection::Pets => (
                tables.pets.len(),
                tables.pets.iter().map(|p| &p.image_url).any(stale),
            ),
            Collection::Stories => (
                tables.stories.len(),
                tables.stories.iter().map(|s| &s.image_url).any(stale),
            ),
            Collection::Tips => (
                tables.tips.len(),
                tables.tips.iter().map(|t| &t.image_url).any(stale),
            ),
            Collection::Products => (
                tables.products.len(),
                tables.products.iter().map(|p| &p.image_url).any(stale),
            ),
            Collection::Guides => (tables.guides.len(), false),
            Collection::Partners => (
                tables.partners.len(),
                tables.partners.iter().map(|p| &p.logo_url).any(stale),
            ),
        };

        Ok(CollectionStatus {
            count: count as u64,
            has_placeholder_images,
            seed_version: tables.seed_versions.get(&collection).copied(),
        })
    }

    async fn reseed(
        &self,
        collection: Collection,
        catalog: &SeedCatalog,
        version: i32,
    ) -> Result<(), DomainError> {
        let mut tables = self.write_catalog()?;
        let now = Utc::now();

        match collection {
            Collection::Pets => {
                tables.pets = catalog
                    .pets
                    .iter()
                    .cloned()
                    .zip(1_i64..)
                    .map(|(pet, id)| pet.into_pet(PetId(id), now))
                    .collect();
            }
            Collection::Stories => {
                tables.stories = catalog
                    .stories
                    .iter()
                    .cloned()
                    .zip(1_i64..)
                    .map(|(story, id)| story.into_story(id, now))
                    .collect();
            }
            Collection::Tips => {
                tables.tips = catalog
                    .tips
                    .iter()
                    .cloned()
                    .zip(1_i64..)
                    .map(|(tip, id)| tip.into_tip(id, now))
                    .collect();
            }
            Collection::Products => {
                tables.products = catalog
                    .products
                    .iter()
                    .cloned()
                    .zip(1_i64..)
                    .map(|(product, id)| product.into_product(id, now))
                    .collect();
            }
            Collection::Guides => {
                tables.guides = catalog
                    .guides
                    .iter()
                    .cloned()
                    .zip(1_i64..)
                    .map(|(guide, id)| guide.into_guide(id))
                    .collect();
            }
            Collection::Partners => {
                tables.partners = catalog
                    .partners
                    .iter()
                    .cloned()
                    .zip(1_i64..)
                    .map(|(partner, id)| partner.into_partner(id))
                    .collect();
            }
        }

        tables.seed_versions.insert(collection, version);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;
    use crate::domain::seed::SEED_VERSION;
    use crate::test_utils::{test_application, test_pet};

    async fn seeded_store() -> InMemoryStore {
        let store = InMemoryStore::new();
        let catalog = SeedCatalog::canonical();
        for collection in Collection::ALL {
            store.reseed(collection, &catalog, SEED_VERSION).await.unwrap();
        }
        store
    }

    #[tokio::test]
    async fn empty_store_reports_empty_collections() {
        let store = InMemoryStore::new();

        for collection in Collection::ALL {
            let status = store.status(collection).await.unwrap();
            assert_eq!(status, CollectionStatus::default());
        }
        assert!(store.list_pets().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn reseed_assigns_ids_in_seed_order() {
        let store = seeded_store().await;

        let pet = store.find_pet(PetId(1)).await.unwrap().unwrap();
        assert_eq!(pet.name, "豆豆");
        let last = store.find_pet(PetId(18)).await.unwrap().unwrap();
        assert_eq!(last.name, "团团");
        assert!(store.find_pet(PetId(19)).await.unwrap().is_none());

        let status = store.status(Collection::Pets).await.unwrap();
        assert_eq!(status.count, 18);
        assert_eq!(status.seed_version, Some(SEED_VERSION));
        assert!(!status.has_placeholder_images);
    }

    #[tokio::test]
    async fn reseed_replaces_stale_rows() {
        let mut stale = test_pet(99);
        stale.image_url = "https://picsum.photos/seed/old/800".to_string();
        let store = InMemoryStore::new().with_pet(stale);

        let status = store.status(Collection::Pets).await.unwrap();
        assert!(status.has_placeholder_images);

        store
            .reseed(Collection::Pets, &SeedCatalog::canonical(), SEED_VERSION)
            .await
            .unwrap();

        let pets = store.list_pets().await.unwrap();
        assert_eq!(pets.len(), 18);
        assert!(pets.iter().all(|p| p.id != PetId(99)));
    }

    #[tokio::test]
    async fn placeholder_detection_covers_every_image_column() {
        let mut catalog = SeedCatalog::canonical();
        catalog.stories[0].image_url = "https://picsum.photos/seed/story/800".to_string();
        catalog.tips[0].image_url = "https://picsum.photos/seed/tip/800".to_string();
        catalog.products[0].image_url = "https://picsum.photos/seed/product/800".to_string();
        catalog.partners[0].logo_url = "https://picsum.photos/seed/logo/200".to_string();

        let store = InMemoryStore::new();
        for collection in Collection::ALL {
            store.reseed(collection, &catalog, SEED_VERSION).await.unwrap();
        }

        for collection in Collection::ALL {
            let status = store.status(collection).await.unwrap();
            let expected = !matches!(collection, Collection::Pets | Collection::Guides);
            assert_eq!(status.has_placeholder_images, expected, "{}", collection);
        }
    }

    #[tokio::test]
    async fn lists_follow_display_order() {
        let store = seeded_store().await;

        let pets = store.list_pets().await.unwrap();
        assert!(pets.windows(2).all(|w| w[0].created_at >= w[1].created_at));
        assert_eq!(pets[0].id, PetId(1));

        let guides = store.list_guides().await.unwrap();
        assert!(guides.windows(2).all(|w| w[0].order_num <= w[1].order_num));

        let partners = store.list_partners().await.unwrap();
        let ids: Vec<i64> = partners.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn newer_pets_come_first() {
        let mut older = test_pet(1);
        older.created_at = Utc::now() - chrono::Duration::days(1);
        let newer = test_pet(2);
        let store = InMemoryStore::new().with_pet(older).with_pet(newer);

        let ids: Vec<PetId> = store
            .list_pets()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![PetId(2), PetId(1)]);
    }

    #[tokio::test]
    async fn application_ids_start_at_one_and_increase() {
        let store = InMemoryStore::new();

        let first = store.create(&test_application()).await.unwrap();
        let second = store.create(&test_application()).await.unwrap();

        assert_eq!(first.id, ApplicationId(1));
        assert_eq!(second.id, ApplicationId(2));
        assert_eq!(store.application_count(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_applications_get_unique_ids() {
        let store = Arc::new(InMemoryStore::new());

        let handles: Vec<_> = (0..64)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.create(&test_application()).await.unwrap().id })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            assert!(ids.insert(handle.await.unwrap()), "duplicate application id");
        }

        assert_eq!(ids.len(), 64);
        assert_eq!(ids.iter().max(), Some(&ApplicationId(64)));
    }
}
