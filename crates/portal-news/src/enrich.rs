//! News enrichment.
//!
//! Attaches tag records to already-loaded articles. Single reads wrap
//! the one article in a one-element batch so both paths produce
//! identical per-article results.

use std::collections::{HashMap, HashSet};

use portal_core::{News, Result, Tag, TagStore};

/// Distinct tag ids referenced across a batch, in first-seen order.
fn distinct_tag_ids(items: &[News]) -> Vec<i32> {
    let mut seen = HashSet::new();
    items
        .iter()
        .flat_map(|news| news.tag_ids.iter().copied())
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Rebuild each article's attached tags from the given records.
///
/// Walks every article's own `tag_ids` in order against an id index;
/// ids with no matching tag are silently skipped (the tag may have been
/// deleted since), so the attached list may be shorter than the id
/// list. The id list itself is never mutated. Calling this again with
/// the same records yields the same attachments.
pub fn attach_tags(items: &mut [News], tags: Vec<Tag>) {
    let index: HashMap<i32, Tag> = tags.into_iter().map(|tag| (tag.id, tag)).collect();

    for news in items {
        news.tags = news
            .tag_ids
            .iter()
            .filter_map(|id| index.get(id).cloned())
            .collect();
    }
}

/// Load and attach the tags referenced by a batch of articles.
///
/// One set-membership query for the whole batch; an empty id set short
/// circuits without touching the store.
pub async fn enrich_many<S>(tags: &S, mut items: Vec<News>) -> Result<Vec<News>>
where
    S: TagStore + ?Sized,
{
    let ids = distinct_tag_ids(&items);
    if ids.is_empty() {
        return Ok(items);
    }

    let records = tags.find_by_ids(&ids).await?;
    attach_tags(&mut items, records);

    Ok(items)
}

/// Enrich a single article through the batch code path.
pub async fn enrich_one<S>(tags: &S, news: News) -> Result<News>
where
    S: TagStore + ?Sized,
{
    let mut enriched = enrich_many(tags, vec![news]).await?;
    Ok(enriched.pop().expect("one-element batch"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use portal_core::Status;

    fn tag(id: i32, name: &str) -> Tag {
        Tag {
            id,
            name: name.to_string(),
            status: Status::Enabled,
        }
    }

    fn news(id: i32, tag_ids: &[i32]) -> News {
        News {
            id,
            title: format!("news {id}"),
            short_text: "short".to_string(),
            content: None,
            author: None,
            category_id: 1,
            tag_ids: tag_ids.to_vec(),
            published_at: Utc::now(),
            created_at: Utc::now(),
            status: Status::Published,
            category: None,
            tags: Vec::new(),
        }
    }

    struct FakeTags {
        records: Vec<Tag>,
        calls: std::sync::atomic::AtomicUsize,
    }

    impl FakeTags {
        fn new(records: Vec<Tag>) -> Self {
            Self {
                records,
                calls: std::sync::atomic::AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(std::sync::atomic::Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TagStore for FakeTags {
        async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Tag>> {
            self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            Ok(self
                .records
                .iter()
                .filter(|t| ids.contains(&t.id))
                .cloned()
                .collect())
        }
    }

    #[test]
    fn test_attach_preserves_per_article_id_order() {
        let mut items = vec![news(1, &[3, 1, 2])];
        attach_tags(&mut items, vec![tag(1, "a"), tag(2, "b"), tag(3, "c")]);

        let attached: Vec<&str> = items[0].tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(attached, vec!["c", "a", "b"]);
        assert_eq!(items[0].tag_ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_attach_skips_missing_ids_without_mutating_id_list() {
        let mut items = vec![news(1, &[1, 99, 2])];
        attach_tags(&mut items, vec![tag(1, "a"), tag(2, "b")]);

        assert_eq!(items[0].tags.len(), 2);
        assert_eq!(items[0].tag_ids, vec![1, 99, 2]);
    }

    #[test]
    fn test_attach_is_idempotent() {
        let records = vec![tag(1, "a"), tag(2, "b")];
        let mut items = vec![news(1, &[2, 1])];

        attach_tags(&mut items, records.clone());
        let first = items[0].tags.clone();

        attach_tags(&mut items, records);
        assert_eq!(items[0].tags, first);
    }

    #[test]
    fn test_distinct_tag_ids_across_batch() {
        let items = vec![news(1, &[1, 2]), news(2, &[2, 3]), news(3, &[])];
        assert_eq!(distinct_tag_ids(&items), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_enrich_many_attaches_per_article() {
        let store = FakeTags::new(vec![tag(1, "a"), tag(2, "b"), tag(3, "c")]);
        let items = vec![news(1, &[1, 2]), news(2, &[3])];

        let enriched = enrich_many(&store, items).await.unwrap();

        assert_eq!(enriched[0].tags.len(), 2);
        assert_eq!(enriched[1].tags[0].name, "c");
        assert_eq!(store.calls(), 1);
    }

    #[tokio::test]
    async fn test_enrich_many_empty_id_set_issues_no_query() {
        let store = FakeTags::new(vec![tag(1, "a")]);
        let items = vec![news(1, &[]), news(2, &[])];

        let enriched = enrich_many(&store, items).await.unwrap();

        assert!(enriched.iter().all(|n| n.tags.is_empty()));
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn test_enrich_one_matches_batch_path() {
        let store = FakeTags::new(vec![tag(1, "a"), tag(2, "b")]);

        let single = enrich_one(&store, news(1, &[2, 1])).await.unwrap();
        let batch = enrich_many(&store, vec![news(1, &[2, 1])]).await.unwrap();

        assert_eq!(single.tags, batch[0].tags);
    }
}
