//! Store contracts consumed by the service layer.
//!
//! These traits capture the minimum the services need from the backing
//! store for their read-side collaborators, enabling in-memory mocks in
//! unit tests. Transaction-bound writes are deliberately not part of
//! these traits: they live as inherent `_tx` methods on the concrete
//! repositories, where the `&mut Transaction` argument acts as the
//! capability token.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Category, Tag};

/// Read access to tag records.
#[async_trait]
pub trait TagStore: Send + Sync {
    /// Set-membership lookup by id; no order guaranteed.
    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Tag>>;
}

/// Read access to category records.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// Fetch a category by id; `Ok(None)` when absent.
    async fn get(&self, id: i32) -> Result<Option<Category>>;
}
