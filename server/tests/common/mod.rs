//! Shared helpers for API tests.

#![allow(dead_code)]

use std::sync::Arc;

use gameshelf_server::build_router;
use gameshelf_storage::{CatalogSource, CatalogStore};
use rusqlite::params;

/// Spin up the HTTP server on an OS-assigned port, returning the base URL.
pub async fn spawn_server<S: CatalogSource>(source: S) -> String {
    let app = build_router(Arc::new(source));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://127.0.0.1:{}", port)
}

pub fn insert_row(
    store: &CatalogStore,
    table: &str,
    id: i64,
    name: &str,
    description: Option<&str>,
) {
    let sql = format!("INSERT INTO {table} (id, name, description) VALUES (?1, ?2, ?3)");
    store
        .with_connection(|conn| conn.execute(&sql, params![id, name, description]))
        .unwrap();
}

/// A store holding a few categories and publishers.
pub fn seeded_store() -> CatalogStore {
    let store = CatalogStore::open_in_memory().unwrap();
    insert_row(&store, "categories", 1, "Fiction", Some("Fictional works"));
    insert_row(&store, "categories", 2, "Strategy", Some("Plan ahead"));
    insert_row(&store, "categories", 3, "Party", None);
    insert_row(&store, "publishers", 1, "Tailspin Toys", Some("Games for everyone"));
    insert_row(&store, "publishers", 2, "Contoso Games", None);
    store
}

pub async fn get(url: String) -> reqwest::Response {
    reqwest::get(url).await.unwrap()
}
