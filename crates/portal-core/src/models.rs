//! Core data models for the news-portal backend.
//!
//! These types are shared across all portal crates and represent the
//! domain entities: tags, categories, news articles, and the incoming
//! suggestion DTO with its validation-error shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// STATUS
// =============================================================================

/// Lifecycle flag gating visibility in read paths.
///
/// Stored as INT4. Newly reconciled tags are created `Enabled`;
/// suggested articles are inserted as `Draft` and stay invisible to the
/// public read paths until published.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, sqlx::Type,
)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum Status {
    /// Submitted but not yet reviewed.
    #[default]
    Draft = 0,
    /// Active and usable.
    Enabled = 1,
    /// Hidden from all read paths.
    Disabled = 2,
    /// Publicly visible.
    Published = 3,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Enabled => write!(f, "enabled"),
            Self::Disabled => write!(f, "disabled"),
            Self::Published => write!(f, "published"),
        }
    }
}

// =============================================================================
// ENTITIES
// =============================================================================

/// A free-text tag. Names are unique and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i32,
    pub name: String,
    pub status: Status,
}

/// A news category. Read-only from the portal's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    pub title: String,
    pub sort: Option<i32>,
    pub status: Status,
}

/// A news article.
///
/// `tag_ids` is the persisted, ordered reference list; `tags` and
/// `category` are enrichment-only attachments populated after a fetch
/// and skipped in serialization when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct News {
    pub id: i32,
    pub title: String,
    pub short_text: String,
    pub content: Option<String>,
    pub author: Option<String>,
    pub category_id: i32,
    pub tag_ids: Vec<i32>,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

// =============================================================================
// SUGGESTION INPUT
// =============================================================================

/// An incoming article submission, before tag names are resolved to ids.
///
/// Constructed by the transport layer, validated, consumed once by the
/// suggestion service, then discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsSuggestion {
    pub title: String,
    pub text: String,
    pub short_text: String,
    pub category_id: i32,
    pub tags: Vec<String>,
}

/// Insert request for a news article, carrying already-resolved tag ids.
#[derive(Debug, Clone)]
pub struct CreateNewsRequest {
    pub title: String,
    pub short_text: String,
    pub content: Option<String>,
    pub author: Option<String>,
    pub category_id: i32,
    pub tag_ids: Vec<i32>,
    pub status: Status,
}

impl NewsSuggestion {
    /// Build the insert request once tag names have been reconciled.
    pub fn into_request(self, tag_ids: Vec<i32>) -> CreateNewsRequest {
        CreateNewsRequest {
            title: self.title,
            short_text: self.short_text,
            content: Some(self.text),
            author: None,
            category_id: self.category_id,
            tag_ids,
            status: Status::Draft,
        }
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

/// A single field-level violation. Produced in batches, never partial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    #[serde(rename = "error")]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint: Option<String>,
}

impl ValidationError {
    pub fn new(field: &str, message: &str, constraint: Option<&str>) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            constraint: constraint.map(str::to_string),
        }
    }
}

// =============================================================================
// READ FILTERS
// =============================================================================

/// Filter for news list/count reads. `None` means "no filter"; the
/// transport layer maps non-positive ids to `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NewsFilter {
    pub category_id: Option<i32>,
    pub tag_id: Option<i32>,
}

impl NewsFilter {
    /// Normalize raw transport ids: zero or negative means unset.
    pub fn from_raw(category_id: i32, tag_id: i32) -> Self {
        Self {
            category_id: (category_id > 0).then_some(category_id),
            tag_id: (tag_id > 0).then_some(tag_id),
        }
    }
}

/// Page-based pagination. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page: i64,
    pub per_page: i64,
}

impl Pager {
    pub const DEFAULT_PER_PAGE: i64 = 25;

    pub fn new(page: i64, per_page: i64) -> Self {
        Self {
            page: page.max(1),
            per_page: if per_page > 0 {
                per_page
            } else {
                Self::DEFAULT_PER_PAGE
            },
        }
    }

    /// Unbounded pager for internal set lookups.
    pub fn no_limit() -> Self {
        Self {
            page: 1,
            per_page: i64::MAX,
        }
    }

    pub fn limit(&self) -> i64 {
        self.per_page
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(Status::Draft.to_string(), "draft");
        assert_eq!(Status::Enabled.to_string(), "enabled");
        assert_eq!(Status::Disabled.to_string(), "disabled");
        assert_eq!(Status::Published.to_string(), "published");
    }

    #[test]
    fn test_status_default_is_draft() {
        assert_eq!(Status::default(), Status::Draft);
    }

    #[test]
    fn test_status_serde_snake_case() {
        let json = serde_json::to_string(&Status::Published).unwrap();
        assert_eq!(json, "\"published\"");
        let back: Status = serde_json::from_str("\"enabled\"").unwrap();
        assert_eq!(back, Status::Enabled);
    }

    #[test]
    fn test_suggestion_camel_case_wire_shape() {
        let json = r#"{
            "title": "Big News",
            "text": "body",
            "shortText": "short",
            "categoryId": 1,
            "tags": ["breaking", "world"]
        }"#;
        let suggestion: NewsSuggestion = serde_json::from_str(json).unwrap();
        assert_eq!(suggestion.short_text, "short");
        assert_eq!(suggestion.category_id, 1);
        assert_eq!(suggestion.tags, vec!["breaking", "world"]);
    }

    #[test]
    fn test_into_request_carries_resolved_ids_and_draft_status() {
        let suggestion = NewsSuggestion {
            title: "Big News".to_string(),
            text: "body".to_string(),
            short_text: "short".to_string(),
            category_id: 1,
            tags: vec!["breaking".to_string()],
        };

        let req = suggestion.into_request(vec![7, 9]);
        assert_eq!(req.tag_ids, vec![7, 9]);
        assert_eq!(req.content.as_deref(), Some("body"));
        assert_eq!(req.status, Status::Draft);
        assert!(req.author.is_none());
    }

    #[test]
    fn test_filter_from_raw_treats_non_positive_as_unset() {
        assert_eq!(NewsFilter::from_raw(0, 0), NewsFilter::default());
        assert_eq!(
            NewsFilter::from_raw(3, -1),
            NewsFilter {
                category_id: Some(3),
                tag_id: None
            }
        );
        assert_eq!(
            NewsFilter::from_raw(2, 5),
            NewsFilter {
                category_id: Some(2),
                tag_id: Some(5)
            }
        );
    }

    #[test]
    fn test_pager_offset() {
        let pager = Pager::new(3, 10);
        assert_eq!(pager.limit(), 10);
        assert_eq!(pager.offset(), 20);
    }

    #[test]
    fn test_pager_clamps_invalid_input() {
        let pager = Pager::new(0, -5);
        assert_eq!(pager.page, 1);
        assert_eq!(pager.per_page, Pager::DEFAULT_PER_PAGE);
        assert_eq!(pager.offset(), 0);
    }

    #[test]
    fn test_validation_error_wire_shape() {
        let err = ValidationError::new("categoryId", "category does not exist", Some("exists"));
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["field"], "categoryId");
        assert_eq!(json["error"], "category does not exist");
        assert_eq!(json["constraint"], "exists");

        let bare = ValidationError::new("title", "is required", None);
        let json = serde_json::to_value(&bare).unwrap();
        assert!(json.get("constraint").is_none());
    }
}
