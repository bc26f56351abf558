//! Catalog handlers
//!
//! Read-only endpoints, each returning a whole collection in display order.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::domain::entities::{Guide, Partner, Pet, PetId, Product, Story, Tip};
use crate::error::AppError;
use crate::AppState;

/// GET /api/pets
///
/// All pets, newest first.
pub async fn list_pets(State(state): State<AppState>) -> Result<Json<Vec<Pet>>, AppError> {
    Ok(Json(state.catalog_service.list_pets().await?))
}

/// GET /api/pets/:id
///
/// A single pet. Unknown and malformed ids are both 404.
pub async fn get_pet(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Pet>, AppError> {
    let id: PetId = id
        .parse()
        .map_err(|_| AppError::NotFound(format!("Pet {} not found", id)))?;

    Ok(Json(state.catalog_service.get_pet(id).await?))
}

/// GET /api/stories
pub async fn list_stories(State(state): State<AppState>) -> Result<Json<Vec<Story>>, AppError> {
    Ok(Json(state.catalog_service.list_stories().await?))
}

/// GET /api/tips
pub async fn list_tips(State(state): State<AppState>) -> Result<Json<Vec<Tip>>, AppError> {
    Ok(Json(state.catalog_service.list_tips().await?))
}

/// GET /api/products
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, AppError> {
    Ok(Json(state.catalog_service.list_products().await?))
}

/// GET /api/guides
///
/// Guide sections in ascending `order_num`.
pub async fn list_guides(State(state): State<AppState>) -> Result<Json<Vec<Guide>>, AppError> {
    Ok(Json(state.catalog_service.list_guides().await?))
}

/// GET /api/partners
pub async fn list_partners(
    State(state): State<AppState>,
) -> Result<Json<Vec<Partner>>, AppError> {
    Ok(Json(state.catalog_service.list_partners().await?))
}
