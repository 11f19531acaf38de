//! News service orchestration.

use std::time::Instant;

use tracing::{debug, info};

use portal_core::{Category, Error, News, NewsFilter, NewsSuggestion, Pager, Result, Tag,
    ValidationError};
use portal_db::{Database, SUGGEST_LOCK};

use crate::enrich::{attach_tags, enrich_many, enrich_one};
use crate::reconcile::reconcile_tags;
use crate::validate;

/// Public news-portal service: read projections plus the suggestion
/// write path.
///
/// Reads require no locking and run fully in parallel; suggestion
/// writes serialize against each other under [`SUGGEST_LOCK`].
#[derive(Clone)]
pub struct NewsService {
    db: Database,
}

impl NewsService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// List published news with categories and tags attached.
    pub async fn get_list(&self, filter: NewsFilter, pager: Pager) -> Result<Vec<News>> {
        let items = self.db.news.list(filter, pager).await?;
        let items = enrich_many(&self.db.tags, items).await?;

        debug!(
            subsystem = "news",
            component = "list",
            op = "get_list",
            result_count = items.len(),
            "Listed news"
        );
        Ok(items)
    }

    /// Count published news matching the filter.
    pub async fn get_count(&self, filter: NewsFilter) -> Result<i64> {
        self.db.news.count(filter).await
    }

    /// Fetch one published article with tags and category attached.
    ///
    /// Goes through the same enrichment path as `get_list`.
    pub async fn get_news(&self, id: i32) -> Result<News> {
        let news = self
            .db
            .news
            .get(id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("news {id}")))?;

        enrich_one(&self.db.tags, news).await
    }

    /// List visible categories.
    pub async fn get_categories(&self) -> Result<Vec<Category>> {
        self.db.categories.list().await
    }

    /// List visible tags.
    pub async fn get_tags(&self) -> Result<Vec<Tag>> {
        self.db.tags.list().await
    }

    /// Dry-run validation of a submission. No side effects.
    pub async fn validate_suggestion(
        &self,
        suggestion: &NewsSuggestion,
    ) -> Result<Vec<ValidationError>> {
        let (violations, _) = validate::validate_suggestion(&self.db.categories, suggestion).await?;
        Ok(violations)
    }

    /// Accept a news suggestion.
    ///
    /// Linear, no retries: validate, then reconcile tags and insert the
    /// article atomically under the suggestion lock, then enrich the
    /// result outside the lock. Violations surface as
    /// [`Error::Validation`] before any write; any later failure rolls
    /// the whole write back and is terminal for this submission.
    pub async fn suggest(&self, suggestion: NewsSuggestion) -> Result<News> {
        let start = Instant::now();

        let (violations, category) =
            validate::validate_suggestion(&self.db.categories, &suggestion).await?;
        if !violations.is_empty() {
            return Err(Error::Validation(violations));
        }

        let db = self.db.clone();
        let (news, tags) = self
            .db
            .run_exclusive(SUGGEST_LOCK, move |tx| {
                Box::pin(async move {
                    let tags = reconcile_tags(&db, tx, &suggestion.tags).await?;
                    let tag_ids: Vec<i32> = tags.iter().map(|tag| tag.id).collect();
                    let news = db
                        .news
                        .insert_tx(tx, suggestion.into_request(tag_ids))
                        .await?;
                    Ok((news, tags))
                })
            })
            .await?;

        // Enrichment runs outside the lock; the reconciled tags and the
        // category resolved during validation are reused, no re-query.
        let mut news = news;
        attach_tags(std::slice::from_mut(&mut news), tags);
        news.category = category;

        info!(
            subsystem = "news",
            component = "suggest",
            op = "suggest",
            news_id = news.id,
            result_count = news.tags.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Accepted news suggestion"
        );
        Ok(news)
    }
}
