//! Shelter API Server
//!
//! Serves the pet-adoption charity's catalog (pets, stories, tips, products,
//! guides, partners) and accepts adoption applications.
//! Uses hexagonal (ports & adapters) architecture so the SQLite and in-memory
//! stores are interchangeable behind the same handlers.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::Repositories;
use app::{ApplicationService, CatalogService};
use config::Config;
use domain::ports::{ApplicationRepository, CatalogRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<CatalogService<dyn CatalogRepository>>,
    pub application_service: Arc<ApplicationService<dyn ApplicationRepository>>,
}

impl AppState {
    pub fn new(repositories: &Repositories) -> Self {
        Self {
            catalog_service: Arc::new(CatalogService::new(repositories.catalog.clone())),
            application_service: Arc::new(ApplicationService::new(
                repositories.applications.clone(),
            )),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the full router: API routes, optional static front end, middleware
pub fn build_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let api = Router::new()
        .route("/pets", get(handlers::list_pets))
        .route("/pets/:id", get(handlers::get_pet))
        .route("/stories", get(handlers::list_stories))
        .route("/tips", get(handlers::list_tips))
        .route("/products", get(handlers::list_products))
        .route("/guides", get(handlers::list_guides))
        .route("/partners", get(handlers::list_partners))
        .route("/applications", post(handlers::create_application));

    let mut router = Router::new()
        // Health check
        .route("/health", get(health))
        .nest("/api", api);

    // Single-page app: unknown paths get index.html
    if let Some(dir) = static_dir {
        tracing::info!("Serving static files from {}", dir.display());
        router = router
            .fallback_service(ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html"))));
    }

    router
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,shelter_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting shelter API...");

    // Load configuration
    let config = Config::from_env();
    tracing::info!("Storage backend: {}", config.storage);

    // Open and seed the store (falls back to memory if SQLite is unavailable)
    let repositories = app::bootstrap(&config)
        .await
        .context("failed to initialize store")?;

    let state = AppState::new(&repositories);
    let app = build_router(state, config.static_dir.as_deref());

    // Start server
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
