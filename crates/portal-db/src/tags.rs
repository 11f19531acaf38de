//! Tag repository implementation.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{Pool, Postgres, Row, Transaction};

use portal_core::{Error, Result, Status, Tag, TagStore};

/// PostgreSQL tag repository.
///
/// Reads run against the pool; writes take a `&mut Transaction` and are
/// only reachable from inside a [`run_exclusive`](crate::Database::run_exclusive)
/// scope.
#[derive(Clone)]
pub struct PgTagRepository {
    pool: Pool<Postgres>,
}

fn tag_from_row(row: &PgRow) -> Tag {
    Tag {
        id: row.get("id"),
        name: row.get("name"),
        status: row.get("status"),
    }
}

impl PgTagRepository {
    /// Create a new PgTagRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all visible tags, ordered by name.
    pub async fn list(&self) -> Result<Vec<Tag>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, status
            FROM tag
            WHERE status IN ($1, $2)
            ORDER BY name
            "#,
        )
        .bind(Status::Enabled)
        .bind(Status::Published)
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(rows.iter().map(tag_from_row).collect())
    }

    /// Set-membership lookup by id. No particular order is guaranteed;
    /// callers impose their own.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Tag>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query("SELECT id, name, status FROM tag WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(rows.iter().map(tag_from_row).collect())
    }

    /// Set-membership lookup by name within a transaction.
    ///
    /// An empty result set is not an error; it means none exist yet.
    pub async fn find_by_names_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        names: &[String],
    ) -> Result<Vec<Tag>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query("SELECT id, name, status FROM tag WHERE name = ANY($1)")
            .bind(names)
            .fetch_all(&mut **tx)
            .await
            .map_err(Error::Database)?;

        Ok(rows.iter().map(tag_from_row).collect())
    }

    /// Insert a tag within a transaction.
    ///
    /// A unique violation on the name means a concurrent writer created
    /// it first; surfaced as [`Error::DuplicateTag`], never swallowed.
    pub async fn create_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
        status: Status,
    ) -> Result<Tag> {
        let row = sqlx::query(
            "INSERT INTO tag (name, status) VALUES ($1, $2) RETURNING id, name, status",
        )
        .bind(name)
        .bind(status)
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                Error::DuplicateTag(name.to_string())
            }
            _ => Error::Database(e),
        })?;

        Ok(tag_from_row(&row))
    }
}

#[async_trait]
impl TagStore for PgTagRepository {
    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Tag>> {
        PgTagRepository::find_by_ids(self, ids).await
    }
}
