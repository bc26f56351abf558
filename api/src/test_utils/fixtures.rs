//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::adapters::{InMemoryStore, Repositories};
use crate::app::SeedService;
use crate::domain::entities::{NewApplication, Pet, PetId, PetStatus};

/// Create a test pet with the given id
pub fn test_pet(id: i64) -> Pet {
    Pet {
        id: PetId(id),
        name: format!("pet-{}", id),
        species: "狗".to_string(),
        breed: "柯基".to_string(),
        age: "1岁".to_string(),
        gender: "公".to_string(),
        description: "A test pet".to_string(),
        image_url: format!("https://images.unsplash.com/photo-test-{}", id),
        status: PetStatus::Available,
        created_at: Utc::now(),
    }
}

/// The application used throughout the API examples
pub fn test_application() -> NewApplication {
    NewApplication {
        pet_id: Some(1),
        applicant_name: Some("Zhang".to_string()),
        email: Some("a@b.com".to_string()),
        phone: Some("123".to_string()),
        message: Some("hi".to_string()),
    }
}

/// A fresh in-memory store seeded with the canonical catalog
pub async fn seeded_memory_store() -> Arc<InMemoryStore> {
    let store = Arc::new(InMemoryStore::new());
    SeedService::new(store.clone())
        .seed_all()
        .await
        .expect("seeding an in-memory store cannot fail");
    store
}

/// Repositories over a seeded in-memory store
pub async fn seeded_repositories() -> Repositories {
    Repositories::from_store(seeded_memory_store().await)
}

/// A unique SQLite file path under the system temp dir, removed on drop
pub struct TempDatabase {
    path: PathBuf,
}

impl TempDatabase {
    pub fn new() -> Self {
        Self {
            path: std::env::temp_dir().join(format!("shelter-test-{}.db", Uuid::new_v4())),
        }
    }

    /// Like `new`, with `suffix` appended to the unique file name
    pub fn with_suffix(suffix: &str) -> Self {
        Self {
            path: std::env::temp_dir()
                .join(format!("shelter-test-{}-{}.db", Uuid::new_v4(), suffix)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDatabase {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm", "-journal"] {
            let mut file = self.path.clone().into_os_string();
            file.push(suffix);
            let _ = std::fs::remove_file(file);
        }
    }
}
