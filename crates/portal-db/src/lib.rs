//! # portal-db
//!
//! PostgreSQL database layer for the news-portal backend.
//!
//! This crate provides:
//! - Connection pool management
//! - Repository implementations for tags, categories, and news
//! - The lock-scoped transaction runner serializing suggestion writes
//! - Embedded schema migrations
//!
//! ## Example
//!
//! ```rust,ignore
//! use portal_db::Database;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("postgres://localhost/portal").await?;
//!     db.run_migrations().await?;
//!
//!     let tags = db.tags.list().await?;
//!     println!("{} tags", tags.len());
//!     Ok(())
//! }
//! ```

pub mod categories;
pub mod lock;
pub mod news;
pub mod pool;
pub mod tags;

// Test fixtures for integration tests
// Note: Always compiled so integration tests (in tests/) can use DEFAULT_TEST_DATABASE_URL
pub mod test_fixtures;

// Re-export core types
pub use portal_core::*;

// Re-export repository implementations
pub use categories::PgCategoryRepository;
pub use lock::SUGGEST_LOCK;
pub use news::PgNewsRepository;
pub use pool::{create_pool, create_pool_with_config, log_pool_metrics, PoolConfig};
pub use tags::PgTagRepository;

use sqlx::PgPool;

/// Main database façade providing access to all repositories.
#[derive(Clone)]
pub struct Database {
    /// The underlying connection pool.
    pub pool: PgPool,
    /// Tag repository.
    pub tags: PgTagRepository,
    /// Category repository (read-only).
    pub categories: PgCategoryRepository,
    /// News repository.
    pub news: PgNewsRepository,
}

impl Database {
    /// Connect with default pool configuration.
    pub async fn connect(database_url: &str) -> Result<Self> {
        Self::connect_with_config(database_url, PoolConfig::default()).await
    }

    /// Connect with custom pool configuration.
    pub async fn connect_with_config(database_url: &str, config: PoolConfig) -> Result<Self> {
        let pool = create_pool_with_config(database_url, config).await?;
        Ok(Self::from_pool(pool))
    }

    /// Build a Database from an existing pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            tags: PgTagRepository::new(pool.clone()),
            categories: PgCategoryRepository::new(pool.clone()),
            news: PgNewsRepository::new(pool.clone()),
            pool,
        }
    }

    /// Apply embedded schema migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| Error::Internal(format!("migrations: {e}")))
    }
}
