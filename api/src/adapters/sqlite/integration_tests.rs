//! SQLite store tests
//!
//! Run against a private in-memory database, or a temp file when a test
//! needs to "reboot" by reconnecting to the same data.

use std::sync::Arc;

use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

use super::*;
use crate::app::SeedService;
use crate::domain::entities::{ApplicationId, PetId};
use crate::domain::ports::*;
use crate::domain::seed::{Collection, ReseedReason, SeedCatalog, SEED_VERSION};
use crate::entity::{partners, pets, seed_versions, stories};
use crate::test_utils::{test_application, TempDatabase};

async fn seeded_in_memory() -> Arc<SqliteStore> {
    let store = Arc::new(SqliteStore::open_in_memory().await.unwrap());
    SeedService::new(store.clone()).seed_all().await.unwrap();
    store
}

mod catalog_tests {
    use super::*;

    #[tokio::test]
    async fn seeded_counts_match_canonical_catalog() {
        let store = seeded_in_memory().await;

        assert_eq!(store.list_pets().await.unwrap().len(), 18);
        assert_eq!(store.list_stories().await.unwrap().len(), 2);
        assert_eq!(store.list_tips().await.unwrap().len(), 3);
        assert_eq!(store.list_products().await.unwrap().len(), 4);
        assert_eq!(store.list_guides().await.unwrap().len(), 4);
        assert_eq!(store.list_partners().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn find_pet_by_id() {
        let store = seeded_in_memory().await;

        let pet = store.find_pet(PetId(1)).await.unwrap().unwrap();
        assert_eq!(pet.name, "豆豆");
        assert_eq!(pet.species, "狗");
        assert_eq!(pet.breed, "金毛");

        assert!(store.find_pet(PetId(999_999)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn lists_follow_display_order() {
        let store = seeded_in_memory().await;

        let pets = store.list_pets().await.unwrap();
        assert!(pets.windows(2).all(|w| w[0].created_at >= w[1].created_at));

        let guides = store.list_guides().await.unwrap();
        let orders: Vec<i32> = guides.iter().map(|g| g.order_num).collect();
        assert_eq!(orders, vec![1, 2, 3, 4]);

        let partners = store.list_partners().await.unwrap();
        let ids: Vec<i64> = partners.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn newer_pet_is_listed_first() {
        let store = seeded_in_memory().await;

        pets::ActiveModel {
            id: Set(50),
            name: Set("新来的".to_string()),
            species: Set("猫".to_string()),
            breed: Set("狸花猫".to_string()),
            age: Set("3个月".to_string()),
            gender: Set("母".to_string()),
            description: Set("刚到救助中心。".to_string()),
            image_url: Set("https://images.unsplash.com/photo-new".to_string()),
            status: Set("available".to_string()),
            created_at: Set(Utc::now() + chrono::Duration::seconds(5)),
        }
        .insert(store.connection())
        .await
        .unwrap();

        let pets = store.list_pets().await.unwrap();
        assert_eq!(pets[0].id, PetId(50));
        assert_eq!(pets.len(), 19);
    }
}

mod application_tests {
    use super::*;

    #[tokio::test]
    async fn first_application_gets_id_one() {
        let store = SqliteStore::open_in_memory().await.unwrap();

        let first = store.create(&test_application()).await.unwrap();
        let second = store.create(&test_application()).await.unwrap();

        assert_eq!(first.id, ApplicationId(1));
        assert_eq!(second.id, ApplicationId(2));
        assert_eq!(first.applicant_name.as_deref(), Some("Zhang"));
        assert_eq!(first.pet_id, Some(1));
    }

    #[tokio::test]
    async fn applications_survive_catalog_reseed() {
        let store = seeded_in_memory().await;
        let before = store.create(&test_application()).await.unwrap();

        store
            .reseed(Collection::Pets, &SeedCatalog::canonical(), SEED_VERSION)
            .await
            .unwrap();

        let after = store.create(&test_application()).await.unwrap();
        assert!(after.id > before.id);
    }

    #[tokio::test]
    async fn file_name_with_url_characters_is_used_verbatim() {
        let temp = TempDatabase::with_suffix("shelter?mode=ro#50%");

        {
            let store = SqliteStore::open(temp.path()).await.unwrap();
            store.create(&test_application()).await.unwrap();
        }
        assert!(temp.path().exists());

        let store = SqliteStore::open(temp.path()).await.unwrap();
        let next = store.create(&test_application()).await.unwrap();
        assert_eq!(next.id, ApplicationId(2));
    }
}

mod seed_tests {
    use super::*;

    #[tokio::test]
    async fn reseed_stamps_version() {
        let store = seeded_in_memory().await;

        for collection in Collection::ALL {
            let status = store.status(collection).await.unwrap();
            assert_eq!(status.seed_version, Some(SEED_VERSION));
            assert!(!status.has_placeholder_images);
        }
    }

    #[tokio::test]
    async fn missing_version_stamp_triggers_reseed() {
        let store = seeded_in_memory().await;
        seed_versions::Entity::delete_many()
            .exec(store.connection())
            .await
            .unwrap();

        let report = SeedService::new(store.clone()).seed_all().await.unwrap();

        for collection in Collection::ALL {
            assert_eq!(
                report.reason(collection),
                Some(ReseedReason::VersionMismatch)
            );
        }
        assert_eq!(store.list_pets().await.unwrap().len(), 18);
    }

    #[tokio::test]
    async fn reboot_does_not_duplicate_catalog() {
        let temp = TempDatabase::new();

        {
            let store = Arc::new(SqliteStore::open(temp.path()).await.unwrap());
            let report = SeedService::new(store.clone()).seed_all().await.unwrap();
            assert_eq!(report.reseeded.len(), Collection::ALL.len());
        }

        let store = Arc::new(SqliteStore::open(temp.path()).await.unwrap());
        let report = SeedService::new(store.clone()).seed_all().await.unwrap();

        assert!(report.is_noop());
        assert_eq!(store.list_pets().await.unwrap().len(), 18);
        assert_eq!(store.list_partners().await.unwrap().len(), 3);
        assert_eq!(store.list_guides().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn stale_pet_is_replaced_on_reboot() {
        let temp = TempDatabase::new();

        {
            let store = Arc::new(SqliteStore::open(temp.path()).await.unwrap());
            SeedService::new(store.clone()).seed_all().await.unwrap();

            pets::ActiveModel {
                id: Set(100),
                name: Set("旧数据".to_string()),
                species: Set("狗".to_string()),
                breed: Set("未知".to_string()),
                age: Set("1岁".to_string()),
                gender: Set("公".to_string()),
                description: Set("旧版种子数据".to_string()),
                image_url: Set("https://picsum.photos/seed/dog/800/600".to_string()),
                status: Set("available".to_string()),
                created_at: Set(Utc::now()),
            }
            .insert(store.connection())
            .await
            .unwrap();
        }

        let store = Arc::new(SqliteStore::open(temp.path()).await.unwrap());
        let report = SeedService::new(store.clone()).seed_all().await.unwrap();

        assert_eq!(
            report.reason(Collection::Pets),
            Some(ReseedReason::PlaceholderImages)
        );
        assert_eq!(report.reseeded.len(), 1);

        let canonical = SeedCatalog::canonical().pets;
        let mut pets = store.list_pets().await.unwrap();
        pets.sort_by_key(|p| p.id);

        assert_eq!(pets.len(), canonical.len());
        for ((pet, seed), id) in pets.iter().zip(&canonical).zip(1_i64..) {
            assert_eq!(pet.id, PetId(id));
            assert_eq!(pet.name, seed.name);
            assert_eq!(pet.image_url, seed.image_url);
        }
        assert!(store.find_pet(PetId(100)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn placeholder_logo_and_story_image_are_replaced_on_reboot() {
        let temp = TempDatabase::new();

        {
            let store = Arc::new(SqliteStore::open(temp.path()).await.unwrap());
            SeedService::new(store.clone()).seed_all().await.unwrap();

            partners::ActiveModel {
                id: Set(50),
                name: Set("旧合作伙伴".to_string()),
                logo_url: Set("https://picsum.photos/seed/partner/200/200".to_string()),
                description: Set("旧版种子数据".to_string()),
                website: Set("https://example.org".to_string()),
            }
            .insert(store.connection())
            .await
            .unwrap();

            stories::ActiveModel {
                id: Set(50),
                title: Set("旧故事".to_string()),
                content: Set("旧版种子数据".to_string()),
                pet_name: Set("旧旧".to_string()),
                image_url: Set("https://picsum.photos/seed/story/800/600".to_string()),
                created_at: Set(Utc::now()),
            }
            .insert(store.connection())
            .await
            .unwrap();
        }

        let store = Arc::new(SqliteStore::open(temp.path()).await.unwrap());
        let report = SeedService::new(store.clone()).seed_all().await.unwrap();

        assert_eq!(report.reseeded.len(), 2);
        for collection in Collection::ALL {
            let expected = matches!(collection, Collection::Partners | Collection::Stories)
                .then_some(ReseedReason::PlaceholderImages);
            assert_eq!(report.reason(collection), expected, "{}", collection);
        }

        let canonical = SeedCatalog::canonical();

        let partners = store.list_partners().await.unwrap();
        assert_eq!(partners.len(), canonical.partners.len());
        for ((partner, seed), id) in partners.iter().zip(&canonical.partners).zip(1_i64..) {
            assert_eq!(partner.id, id);
            assert_eq!(partner.name, seed.name);
            assert_eq!(partner.logo_url, seed.logo_url);
        }

        let mut stories = store.list_stories().await.unwrap();
        stories.sort_by_key(|s| s.id);
        assert_eq!(stories.len(), canonical.stories.len());
        for ((story, seed), id) in stories.iter().zip(&canonical.stories).zip(1_i64..) {
            assert_eq!(story.id, id);
            assert_eq!(story.title, seed.title);
            assert_eq!(story.image_url, seed.image_url);
        }

        for collection in [Collection::Partners, Collection::Stories] {
            assert!(!store.status(collection).await.unwrap().has_placeholder_images);
        }
    }
}
