//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod applications;
pub mod catalog;

pub use applications::create_application;
pub use catalog::{
    get_pet, list_guides, list_partners, list_pets, list_products, list_stories, list_tips,
};
