//! Persistence failures must surface as fixed 500 responses.

mod common;

use common::{get, seeded_store, spawn_server};
use gameshelf_model::CatalogEntity;
use gameshelf_server::ErrorBody;
use gameshelf_storage::{CatalogSource, StorageError, StorageResult};
use pretty_assertions::assert_eq;

/// Source whose every read fails.
struct FailingSource;

impl CatalogSource for FailingSource {
    fn list<E: CatalogEntity>(&self) -> StorageResult<Vec<E>> {
        Err(StorageError::Database(rusqlite::Error::InvalidQuery))
    }

    fn get<E: CatalogEntity>(&self, _id: i64) -> StorageResult<Option<E>> {
        Err(StorageError::LockPoisoned)
    }
}

/// Source that panics inside the blocking read task.
struct PanickingSource;

impl CatalogSource for PanickingSource {
    fn list<E: CatalogEntity>(&self) -> StorageResult<Vec<E>> {
        panic!("driver crashed while listing {}", E::PLURAL)
    }

    fn get<E: CatalogEntity>(&self, id: i64) -> StorageResult<Option<E>> {
        panic!("driver crashed while reading {} {}", E::SINGULAR, id)
    }
}

async fn assert_error(url: String, status: u16, message: &str) {
    let resp = get(url).await;
    assert_eq!(resp.status(), status);
    let body: ErrorBody = resp.json().await.unwrap();
    assert_eq!(body.error, message);
}

// ── Failing source ───────────────────────────────────────────────

#[tokio::test]
async fn list_failures_map_to_fixed_messages() {
    let base = spawn_server(FailingSource).await;
    assert_error(format!("{}/api/categories/", base), 500, "Failed to fetch categories").await;
    assert_error(format!("{}/api/publishers/", base), 500, "Failed to fetch publishers").await;
}

#[tokio::test]
async fn get_failures_map_to_fixed_messages() {
    let base = spawn_server(FailingSource).await;
    assert_error(format!("{}/api/categories/1", base), 500, "Failed to fetch category").await;
    assert_error(format!("{}/api/publishers/1", base), 500, "Failed to fetch publisher").await;
}

#[tokio::test]
async fn failure_detail_is_not_surfaced() {
    let base = spawn_server(FailingSource).await;
    let text = get(format!("{}/api/categories/1", base)).await.text().await.unwrap();
    assert!(!text.contains("poisoned"));
    assert!(!text.contains("database"));
}

// ── Panicking source ─────────────────────────────────────────────

#[tokio::test]
async fn panicking_reads_map_to_500() {
    let base = spawn_server(PanickingSource).await;
    assert_error(format!("{}/api/categories/", base), 500, "Failed to fetch categories").await;
    assert_error(format!("{}/api/publishers/3", base), 500, "Failed to fetch publisher").await;

    // Server keeps serving after a failed read.
    assert_error(format!("{}/api/publishers/", base), 500, "Failed to fetch publishers").await;
}

// ── Real store with a broken schema ──────────────────────────────

#[tokio::test]
async fn dropped_table_maps_to_500_for_that_entity_only() {
    let store = seeded_store();
    store
        .with_connection(|conn| conn.execute_batch("DROP TABLE categories"))
        .unwrap();
    let base = spawn_server(store).await;

    assert_error(format!("{}/api/categories/", base), 500, "Failed to fetch categories").await;
    assert_error(format!("{}/api/categories/1", base), 500, "Failed to fetch category").await;
    assert_eq!(get(format!("{}/api/publishers/", base)).await.status(), 200);
}

#[tokio::test]
async fn missing_id_on_healthy_store_is_never_500() {
    let base = spawn_server(seeded_store()).await;
    for id in [0u64, 4, 1000, i64::MAX as u64] {
        assert_error(format!("{}/api/categories/{}", base, id), 404, "Category not found").await;
    }
}
