//! Suggestion validation.
//!
//! Two independent checks, both always run, results merged: structural
//! field constraints (pure) and referential category existence (store
//! lookup). Validation never stops at the first violation; an empty
//! result list means the submission is acceptable.

use portal_core::{Category, CategoryStore, NewsSuggestion, Result, ValidationError};

/// Minimum title length, in characters.
pub const TITLE_MIN_CHARS: usize = 3;

/// Maximum title length, in characters.
pub const TITLE_MAX_CHARS: usize = 255;

/// Maximum short-text length, in characters.
pub const SHORT_TEXT_MAX_CHARS: usize = 255;

fn is_alphanumeric_unicode(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphanumeric)
}

/// Check the structural field constraints of a submission.
///
/// Returns the full set of violations; field names are the camelCase
/// wire names, `constraint` carries the rule that failed.
pub fn validate_structure(suggestion: &NewsSuggestion) -> Vec<ValidationError> {
    let mut violations = Vec::new();

    let title_chars = suggestion.title.chars().count();
    if suggestion.title.is_empty() {
        violations.push(ValidationError::new("title", "is required", Some("required")));
    } else if title_chars < TITLE_MIN_CHARS {
        violations.push(ValidationError::new(
            "title",
            "must be at least 3 characters",
            Some("min"),
        ));
    } else if title_chars > TITLE_MAX_CHARS {
        violations.push(ValidationError::new(
            "title",
            "must be at most 255 characters",
            Some("max"),
        ));
    }

    if suggestion.text.is_empty() {
        violations.push(ValidationError::new("text", "is required", Some("required")));
    }

    if suggestion.short_text.is_empty() {
        violations.push(ValidationError::new(
            "shortText",
            "is required",
            Some("required"),
        ));
    } else if suggestion.short_text.chars().count() > SHORT_TEXT_MAX_CHARS {
        violations.push(ValidationError::new(
            "shortText",
            "must be at most 255 characters",
            Some("max"),
        ));
    }

    if suggestion.category_id <= 0 {
        violations.push(ValidationError::new(
            "categoryId",
            "is required",
            Some("required"),
        ));
    }

    if suggestion.tags.is_empty() {
        violations.push(ValidationError::new("tags", "is required", Some("required")));
    }
    for name in &suggestion.tags {
        if !is_alphanumeric_unicode(name) {
            violations.push(ValidationError::new(
                "tags",
                &format!("tag '{name}' must be alphanumeric"),
                Some("alphanumunicode"),
            ));
        }
    }

    violations
}

/// Run the full validation: structural constraints plus the referential
/// category-existence check.
///
/// A missing category appends a violation on `categoryId`; a store
/// error while checking is an infrastructure error and aborts the
/// whole call. The resolved category is returned alongside so callers
/// can attach it to the created article without a second lookup.
pub async fn validate_suggestion<C>(
    categories: &C,
    suggestion: &NewsSuggestion,
) -> Result<(Vec<ValidationError>, Option<Category>)>
where
    C: CategoryStore + ?Sized,
{
    let mut violations = validate_structure(suggestion);

    let category = categories.get(suggestion.category_id).await?;
    if category.is_none() {
        violations.push(ValidationError::new(
            "categoryId",
            "category does not exist",
            Some("exists"),
        ));
    }

    Ok((violations, category))
}
