//! SQLite adapters
//!
//! The durable store: implementations of every repository port using SeaORM
//! over a single SQLite file.

mod application_repo;
mod catalog_repo;
pub mod schema;
mod seed_repo;

#[cfg(test)]
mod integration_tests;

use std::path::Path;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};

use crate::error::DomainError;

use schema::SCHEMA_STATEMENTS;

/// SQLite implementation of the catalog, application and seed ports
pub struct SqliteStore {
    db: DatabaseConnection,
}

impl SqliteStore {
    /// Open (creating if missing) the database file at `path` and ensure the schema exists.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        tracing::debug!("Opening database at {}", path.display());

        let mut options = ConnectOptions::new(connect_url(path));
        options.sqlx_logging(false);

        let db = Database::connect(options).await.map_err(|e| {
            DomainError::Database(format!("failed to open {}: {}", path.display(), e))
        })?;

        let store = Self::with_connection(db).await?;
        tracing::info!("Database opened at {}", path.display());
        Ok(store)
    }

    /// A private in-memory database, used by tests.
    ///
    /// The pool is pinned to one connection; each SQLite memory connection
    /// would otherwise see its own empty database.
    #[cfg(test)]
    pub async fn open_in_memory() -> Result<Self, DomainError> {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let db = Database::connect(options).await.map_err(db_err)?;
        Self::with_connection(db).await
    }

    async fn with_connection(db: DatabaseConnection) -> Result<Self, DomainError> {
        for statement in SCHEMA_STATEMENTS {
            db.execute_unprepared(statement).await.map_err(db_err)?;
        }
        Ok(Self { db })
    }

    /// Raw connection for tests that need to plant rows directly
    #[cfg(test)]
    pub(crate) fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

/// `sqlite://` URL for a file path, creating the file if missing.
///
/// The path is percent-encoded; the driver decodes it back, so names with
/// `?`, `#` or `%` survive the query-string split.
fn connect_url(path: &Path) -> String {
    format!(
        "sqlite://{}?mode=rwc",
        urlencoding::encode(&path.to_string_lossy())
    )
}

fn db_err(e: DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}
