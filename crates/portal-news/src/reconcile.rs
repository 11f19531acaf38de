//! Tag reconciliation.
//!
//! Resolves free-text tag names to canonical tag records, creating the
//! missing ones. Runs only inside a lock-scoped transaction: the
//! `&mut Transaction` parameter is the capability token, so calling it
//! outside a [`run_exclusive`](portal_db::Database::run_exclusive)
//! scope does not compile.

use sqlx::{Postgres, Transaction};
use tracing::debug;

use portal_db::{Database, Result, Status, Tag};

/// Collapse duplicate names to their first occurrence, preserving order.
pub fn dedup_names(names: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    names
        .iter()
        .filter(|name| seen.insert(name.as_str()))
        .cloned()
        .collect()
}

/// Resolve `names` to tag records, creating missing ones as `Enabled`.
///
/// The output is ordered by first occurrence in the input, one tag per
/// distinct name. An empty input returns an empty list without touching
/// the store. Any store error propagates and rolls the enclosing
/// transaction back, so tags are never partially created.
pub async fn reconcile_tags(
    db: &Database,
    tx: &mut Transaction<'_, Postgres>,
    names: &[String],
) -> Result<Vec<Tag>> {
    let names = dedup_names(names);
    if names.is_empty() {
        return Ok(Vec::new());
    }

    let existing = db.tags.find_by_names_tx(tx, &names).await?;
    let index: std::collections::HashMap<String, Tag> = existing
        .into_iter()
        .map(|tag| (tag.name.clone(), tag))
        .collect();

    let mut resolved = Vec::with_capacity(names.len());
    let mut created = 0usize;

    for name in &names {
        match index.get(name) {
            Some(tag) => resolved.push(tag.clone()),
            None => {
                let tag = db.tags.create_tx(tx, name, Status::Enabled).await?;
                created += 1;
                resolved.push(tag);
            }
        }
    }

    debug!(
        subsystem = "news",
        component = "reconcile",
        result_count = resolved.len(),
        tags_created = created,
        "Reconciled tag names"
    );

    Ok(resolved)
}
