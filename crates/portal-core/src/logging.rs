//! Structured logging field name constants.
//!
//! All crates use these constants for consistent structured logging
//! fields, so log aggregation tools can query by standardized names
//! across every subsystem.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Degraded service, requires operator attention |
//! | WARN  | Recoverable issue, automatic fallback applied |
//! | INFO  | Lifecycle events, operation completions |
//! | DEBUG | Decision points, intermediate values |
//! | TRACE | Per-item iteration, high-volume data |

/// Subsystem originating the log event.
/// Values: "db", "news"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "pool", "lock", "suggest", "enrich"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "run_exclusive", "reconcile", "list"
pub const OPERATION: &str = "op";

/// Advisory lock name held by a transaction runner call.
pub const LOCK_NAME: &str = "lock_name";

/// News article id being operated on.
pub const NEWS_ID: &str = "news_id";

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of results returned by a query.
pub const RESULT_COUNT: &str = "result_count";

/// Number of tags created during reconciliation.
pub const TAGS_CREATED: &str = "tags_created";
