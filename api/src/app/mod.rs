//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and the storage ports.

pub mod application_service;
pub mod bootstrap;
pub mod catalog_service;
pub mod seed_service;

pub use application_service::ApplicationService;
pub use bootstrap::bootstrap;
pub use catalog_service::CatalogService;
pub use seed_service::SeedService;
