//! PostgreSQL store tests. Run with `DATABASE_URL` set and `--ignored`.

use short_link::domain::entities::LinkRecord;
use short_link::domain::repositories::{CreateOutcome, LinkStore};
use short_link::infrastructure::persistence::PgLinkStore;
use sqlx::PgPool;
use std::sync::Arc;

async fn create_store(pool: PgPool) -> Arc<PgLinkStore> {
    let store = PgLinkStore::new(Arc::new(pool), "links");
    store.ensure_table().await.unwrap();
    Arc::new(store)
}

#[sqlx::test(migrations = false)]
#[ignore = "requires DATABASE_URL"]
async fn test_create_and_lookup(pool: PgPool) {
    let store = create_store(pool).await;

    let outcome = store
        .create_if_absent(&LinkRecord::new("aB3dE5g", "https://example.com"))
        .await
        .unwrap();

    assert_eq!(outcome, CreateOutcome::Created);
    assert_eq!(
        store.lookup("aB3dE5g").await.unwrap().as_deref(),
        Some("https://example.com")
    );
}

#[sqlx::test(migrations = false)]
#[ignore = "requires DATABASE_URL"]
async fn test_lookup_missing(pool: PgPool) {
    let store = create_store(pool).await;

    assert!(store.lookup("missing").await.unwrap().is_none());
}

#[sqlx::test(migrations = false)]
#[ignore = "requires DATABASE_URL"]
async fn test_existing_record_is_not_overwritten(pool: PgPool) {
    let store = create_store(pool).await;

    store
        .create_if_absent(&LinkRecord::new("aB3dE5g", "https://first.com"))
        .await
        .unwrap();
    let outcome = store
        .create_if_absent(&LinkRecord::new("aB3dE5g", "https://second.com"))
        .await
        .unwrap();

    assert_eq!(outcome, CreateOutcome::AlreadyExists);
    assert_eq!(
        store.lookup("aB3dE5g").await.unwrap().as_deref(),
        Some("https://first.com")
    );
}

#[sqlx::test(migrations = false)]
#[ignore = "requires DATABASE_URL"]
async fn test_ensure_table_is_idempotent(pool: PgPool) {
    let store = create_store(pool).await;

    store.ensure_table().await.unwrap();
}

#[sqlx::test(migrations = false)]
#[ignore = "requires DATABASE_URL"]
async fn test_concurrent_inserts_single_winner(pool: PgPool) {
    let store = create_store(pool).await;

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .create_if_absent(&LinkRecord::new(
                        "raceId1",
                        format!("https://example.com/{i}"),
                    ))
                    .await
                    .unwrap()
            })
        })
        .collect();

    let mut created = 0;
    for handle in handles {
        if handle.await.unwrap() == CreateOutcome::Created {
            created += 1;
        }
    }

    assert_eq!(created, 1);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_slow_statement_is_cancelled_by_server() {
    use short_link::infrastructure::persistence::pg_link_store::connect_options;
    use sqlx::postgres::PgPoolOptions;
    use std::time::Duration;

    let url = std::env::var("DATABASE_URL").unwrap();
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect_with(connect_options(&url, Duration::from_millis(50)).unwrap())
        .await
        .unwrap();

    let result = sqlx::query("SELECT pg_sleep(2)").execute(&pool).await;
    assert!(result.is_err());
}
