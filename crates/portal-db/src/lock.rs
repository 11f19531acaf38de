//! Lock-scoped transaction runner.
//!
//! Pairs a named advisory lock with a database transaction as a single
//! scoped acquisition: the lock is taken inside the transaction via
//! `pg_advisory_xact_lock`, so Postgres releases it on commit, rollback,
//! and connection loss alike. The lock can never be held without an
//! active transaction, and cancelling the caller's future rolls the
//! transaction back (sqlx rolls back on drop), which also drops the
//! lock.

use std::future::Future;
use std::pin::Pin;
use std::time::Instant;

use sqlx::{Postgres, Transaction};
use tracing::{debug, warn};

use portal_core::{Error, Result};

use crate::Database;

/// Lock name serializing all news-suggestion submissions.
///
/// Every submission's reconcile-tags-plus-insert sequence runs under
/// this one name, trading write throughput for tag-creation correctness.
pub const SUGGEST_LOCK: &str = "news.suggest";

impl Database {
    /// Execute `work` under a named advisory lock and a transaction.
    ///
    /// At most one unit of work with a given `lock_name` executes at a
    /// time system-wide; concurrent callers queue on the lock. All
    /// writes inside the unit of work commit or roll back as one.
    ///
    /// The `&mut Transaction` handed to `work` is the capability token
    /// required by every `_tx` repository method, so transaction-only
    /// operations cannot be called outside a runner scope.
    ///
    /// # Errors
    ///
    /// - Lock acquisition failure surfaces as [`Error::Lock`] without
    ///   running the work.
    /// - An error from `work` rolls the transaction back and is
    ///   returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let tag = db.run_exclusive("news.suggest", |tx| Box::pin(async move {
    ///     db2.tags.create_tx(tx, "breaking", Status::Enabled).await
    /// })).await?;
    /// ```
    pub async fn run_exclusive<F, T>(&self, lock_name: &str, work: F) -> Result<T>
    where
        F: for<'a> FnOnce(
            &'a mut Transaction<'_, Postgres>,
        ) -> Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>,
    {
        let start = Instant::now();

        let mut tx = self.pool.begin().await.map_err(Error::Database)?;

        // Transaction-scoped: released by Postgres on every exit path.
        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))")
            .bind(lock_name)
            .execute(&mut *tx)
            .await
            .map_err(|e| Error::Lock(format!("acquire '{lock_name}': {e}")))?;

        debug!(
            subsystem = "db",
            component = "lock",
            op = "acquired",
            lock_name,
            "Advisory lock acquired"
        );

        match work(&mut tx).await {
            Ok(value) => {
                tx.commit().await.map_err(Error::Database)?;
                debug!(
                    subsystem = "db",
                    component = "lock",
                    op = "committed",
                    lock_name,
                    duration_ms = start.elapsed().as_millis() as u64,
                    "Exclusive unit of work committed"
                );
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback().await {
                    warn!(
                        subsystem = "db",
                        component = "lock",
                        lock_name,
                        error = %rollback_err,
                        "Rollback after failed unit of work also failed"
                    );
                }
                Err(err)
            }
        }
    }
}
