//! HTTP API for gameshelf.
//!
//! Exposes read-only list and lookup endpoints for categories and publishers
//! over any [`CatalogSource`].

use std::sync::Arc;

use axum::Router;
use gameshelf_model::{Category, Publisher};
use gameshelf_storage::CatalogSource;

mod config;
mod error;
mod routes;

pub use config::ServerConfig;
pub use error::{ApiError, ErrorBody};

/// Build the HTTP API router over the given catalog source.
pub fn build_router<S: CatalogSource>(source: Arc<S>) -> Router {
    Router::new()
        .merge(routes::entity_routes::<S, Category>())
        .merge(routes::entity_routes::<S, Publisher>())
        .fallback(routes::unknown_route)
        .with_state(source)
}
