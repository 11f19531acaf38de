//! Category repository implementation.
//!
//! Categories are read-only from the portal's perspective; they are
//! managed out of band.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{Pool, Postgres, Row};

use portal_core::{Category, CategoryStore, Error, Result, Status};

/// PostgreSQL category repository.
#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: Pool<Postgres>,
}

fn category_from_row(row: &PgRow) -> Category {
    Category {
        id: row.get("id"),
        title: row.get("title"),
        sort: row.get("sort"),
        status: row.get("status"),
    }
}

impl PgCategoryRepository {
    /// Create a new PgCategoryRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Fetch a category by id, regardless of status.
    ///
    /// Used for referential validation of submissions; returns
    /// `Ok(None)` when the category does not exist.
    pub async fn get(&self, id: i32) -> Result<Option<Category>> {
        let row = sqlx::query("SELECT id, title, sort, status FROM category WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(row.as_ref().map(category_from_row))
    }

    /// List all visible categories in display order.
    pub async fn list(&self) -> Result<Vec<Category>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, sort, status
            FROM category
            WHERE status IN ($1, $2)
            ORDER BY sort NULLS LAST, title
            "#,
        )
        .bind(Status::Enabled)
        .bind(Status::Published)
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(rows.iter().map(category_from_row).collect())
    }
}

#[async_trait]
impl CategoryStore for PgCategoryRepository {
    async fn get(&self, id: i32) -> Result<Option<Category>> {
        PgCategoryRepository::get(self, id).await
    }
}
