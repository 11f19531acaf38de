//! Integration tests for the lock-scoped transaction runner.

use portal_db::test_fixtures::TestDatabase;
use portal_db::{Error, Status};

fn unique(prefix: &str) -> String {
    format!("{}{}", prefix, uuid::Uuid::new_v4().simple())
}

async fn setup() -> TestDatabase {
    dotenvy::dotenv().ok();
    TestDatabase::new().await
}

#[tokio::test]
#[ignore] // Requires database connection
async fn test_run_exclusive_commits_on_success() {
    let test_db = setup().await;
    let name = unique("committed");

    let db = test_db.db.clone();
    let tag_name = name.clone();
    let tag = test_db
        .db
        .run_exclusive("test.lock", move |tx| {
            Box::pin(async move { db.tags.create_tx(tx, &tag_name, Status::Enabled).await })
        })
        .await
        .expect("unit of work should commit");

    assert_eq!(tag.name, name);
    assert_eq!(test_db.count_tags_named(&name).await, 1);
}

#[tokio::test]
#[ignore] // Requires database connection
async fn test_run_exclusive_rolls_back_on_error() {
    let test_db = setup().await;
    let name = unique("rolledback");

    let db = test_db.db.clone();
    let tag_name = name.clone();
    let result: Result<(), Error> = test_db
        .db
        .run_exclusive("test.lock", move |tx| {
            Box::pin(async move {
                db.tags.create_tx(tx, &tag_name, Status::Enabled).await?;
                Err(Error::Internal("forced failure".to_string()))
            })
        })
        .await;

    assert!(result.is_err());
    assert_eq!(test_db.count_tags_named(&name).await, 0);
}

#[tokio::test]
#[ignore] // Requires database connection
async fn test_run_exclusive_serializes_same_lock_name() {
    let test_db = setup().await;
    let name = unique("raced");

    // Both tasks check-then-create the same name. Without the lock the
    // second insert would hit a unique violation; with it, the loser of
    // the race sees the winner's committed row.
    let mut handles = Vec::new();
    for _ in 0..2 {
        let db = test_db.db.clone();
        let tag_name = name.clone();
        handles.push(tokio::spawn(async move {
            let inner = db.clone();
            db.run_exclusive("test.serialize", move |tx| {
                Box::pin(async move {
                    let names = vec![tag_name.clone()];
                    let existing = inner.tags.find_by_names_tx(tx, &names).await?;
                    if existing.is_empty() {
                        inner.tags.create_tx(tx, &tag_name, Status::Enabled).await?;
                    }
                    Ok(())
                })
            })
            .await
        }));
    }

    for handle in handles {
        handle.await.expect("task panicked").expect("work failed");
    }

    assert_eq!(test_db.count_tags_named(&name).await, 1);
}

#[tokio::test]
#[ignore] // Requires database connection
async fn test_duplicate_tag_surfaces_as_distinct_error() {
    let test_db = setup().await;
    let name = unique("dup");
    test_db.seed_tag(&name, Status::Enabled).await;

    let db = test_db.db.clone();
    let tag_name = name.clone();
    let result = test_db
        .db
        .run_exclusive("test.lock", move |tx| {
            Box::pin(async move { db.tags.create_tx(tx, &tag_name, Status::Enabled).await })
        })
        .await;

    match result {
        Err(Error::DuplicateTag(dup)) => assert_eq!(dup, name),
        other => panic!("Expected DuplicateTag, got {other:?}"),
    }
}
