//! News repository implementation.

use sqlx::postgres::PgRow;
use sqlx::{Pool, Postgres, Row, Transaction};

use portal_core::{Category, CreateNewsRequest, Error, News, NewsFilter, Pager, Result, Status};

/// Columns selected for a bare news row (no category join).
const NEWS_COLUMNS: &str = "id, title, short_text, content, author, category_id, \
     tag_ids, published_at, created_at, status";

/// PostgreSQL news repository.
///
/// Public reads see only published articles whose `published_at` has
/// passed; inserts go through `insert_tx` inside a transaction scope.
#[derive(Clone)]
pub struct PgNewsRepository {
    pool: Pool<Postgres>,
}

fn news_from_row(row: &PgRow) -> News {
    News {
        id: row.get("id"),
        title: row.get("title"),
        short_text: row.get("short_text"),
        content: row.get("content"),
        author: row.get("author"),
        category_id: row.get("category_id"),
        tag_ids: row.get("tag_ids"),
        published_at: row.get("published_at"),
        created_at: row.get("created_at"),
        status: row.get("status"),
        category: None,
        tags: Vec::new(),
    }
}

fn news_with_category_from_row(row: &PgRow) -> News {
    let mut news = news_from_row(row);
    news.category = Some(Category {
        id: row.get("c_id"),
        title: row.get("c_title"),
        sort: row.get("c_sort"),
        status: row.get("c_status"),
    });
    news
}

impl PgNewsRepository {
    /// Create a new PgNewsRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List published news with categories attached, newest first.
    ///
    /// Filter fields are null-tolerant: an unset field matches every
    /// row, a set tag id matches via array membership on `tag_ids`.
    pub async fn list(&self, filter: NewsFilter, pager: Pager) -> Result<Vec<News>> {
        let rows = sqlx::query(
            r#"
            SELECT n.id, n.title, n.short_text, n.content, n.author, n.category_id,
                   n.tag_ids, n.published_at, n.created_at, n.status,
                   c.id AS c_id, c.title AS c_title, c.sort AS c_sort, c.status AS c_status
            FROM news n
            JOIN category c ON c.id = n.category_id
            WHERE n.status = $1
              AND n.published_at <= now()
              AND ($2::int4 IS NULL OR n.category_id = $2)
              AND ($3::int4 IS NULL OR $3 = ANY(n.tag_ids))
            ORDER BY n.published_at DESC, n.id DESC
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(Status::Published)
        .bind(filter.category_id)
        .bind(filter.tag_id)
        .bind(pager.limit())
        .bind(pager.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(rows.iter().map(news_with_category_from_row).collect())
    }

    /// Count published news matching the filter. Same predicate as `list`.
    pub async fn count(&self, filter: NewsFilter) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM news
            WHERE status = $1
              AND published_at <= now()
              AND ($2::int4 IS NULL OR category_id = $2)
              AND ($3::int4 IS NULL OR $3 = ANY(tag_ids))
            "#,
        )
        .bind(Status::Published)
        .bind(filter.category_id)
        .bind(filter.tag_id)
        .fetch_one(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(count)
    }

    /// Fetch one published article by id, with its category.
    pub async fn get(&self, id: i32) -> Result<Option<News>> {
        let row = sqlx::query(
            r#"
            SELECT n.id, n.title, n.short_text, n.content, n.author, n.category_id,
                   n.tag_ids, n.published_at, n.created_at, n.status,
                   c.id AS c_id, c.title AS c_title, c.sort AS c_sort, c.status AS c_status
            FROM news n
            JOIN category c ON c.id = n.category_id
            WHERE n.id = $1
              AND n.status = $2
              AND n.published_at <= now()
            "#,
        )
        .bind(id)
        .bind(Status::Published)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(row.as_ref().map(news_with_category_from_row))
    }

    /// Insert an article within a transaction, returning the stored row.
    ///
    /// Every id in `tag_ids` must reference an existing tag at commit
    /// time; the reconciler guarantees this inside the same scope.
    pub async fn insert_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        req: CreateNewsRequest,
    ) -> Result<News> {
        let sql = format!(
            "INSERT INTO news (title, short_text, content, author, category_id, tag_ids, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {NEWS_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(&req.title)
            .bind(&req.short_text)
            .bind(&req.content)
            .bind(&req.author)
            .bind(req.category_id)
            .bind(&req.tag_ids)
            .bind(req.status)
            .fetch_one(&mut **tx)
            .await
            .map_err(Error::Database)?;

        Ok(news_from_row(&row))
    }
}
