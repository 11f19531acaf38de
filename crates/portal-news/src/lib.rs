//! # portal-news
//!
//! Service layer of the news-portal backend.
//!
//! This crate provides:
//! - Suggestion validation (structural + referential, full violation
//!   sets, never partial)
//! - Tag reconciliation inside a lock-scoped transaction
//! - News enrichment (batch tag attachment shared by list and single
//!   reads)
//! - The [`NewsService`] orchestrator exposed to the transport layer
//!
//! ## Example
//!
//! ```rust,ignore
//! use portal_db::Database;
//! use portal_news::NewsService;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("postgres://localhost/portal").await?;
//!     let service = NewsService::new(db);
//!
//!     let news = service.suggest(serde_json::from_str(
//!         r#"{"title":"Big News","text":"...","shortText":"short",
//!             "categoryId":1,"tags":["breaking","world"]}"#,
//!     )?).await?;
//!
//!     println!("created news {}", news.id);
//!     Ok(())
//! }
//! ```

pub mod enrich;
pub mod reconcile;
pub mod service;
pub mod validate;

// Re-export core types
pub use portal_core::*;

pub use enrich::{attach_tags, enrich_many, enrich_one};
pub use reconcile::{dedup_names, reconcile_tags};
pub use service::NewsService;
pub use validate::{validate_structure, validate_suggestion};
