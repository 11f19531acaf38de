//! Integration tests for pool creation and health metrics.

use portal_db::test_fixtures::DEFAULT_TEST_DATABASE_URL;
use portal_db::{create_pool_with_config, log_pool_metrics, PoolConfig};

fn database_url() -> String {
    dotenvy::dotenv().ok();
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_TEST_DATABASE_URL.to_string())
}

#[tokio::test]
#[ignore] // Requires database connection
async fn test_pool_connects_with_custom_config() {
    let config = PoolConfig::new().max_connections(2).min_connections(1);
    let pool = create_pool_with_config(&database_url(), config)
        .await
        .expect("pool should connect");

    assert!(pool.size() >= 1);
    assert!(pool.num_idle() >= 1);
    log_pool_metrics(&pool);
}

#[tokio::test]
#[ignore] // Requires database connection
async fn test_pool_metrics_report_exhaustion() {
    let config = PoolConfig::new().max_connections(1).min_connections(1);
    let pool = create_pool_with_config(&database_url(), config)
        .await
        .expect("pool should connect");

    // Holding the only connection leaves zero idle.
    let conn = pool.acquire().await.expect("acquire failed");
    assert_eq!(pool.num_idle(), 0);
    assert!(pool.size() > 0);
    log_pool_metrics(&pool);

    drop(conn);
}
