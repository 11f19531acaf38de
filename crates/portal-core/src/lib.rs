//! # portal-core
//!
//! Core types and abstractions for the news-portal backend.
//!
//! This crate provides the domain models (tags, categories, news
//! articles, suggestion DTOs), the error taxonomy, and the structured
//! logging field constants that the other portal crates depend on.

pub mod error;
pub mod logging;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
pub use traits::*;
