//! Read-only handlers shared by every catalog entity.
//!
//! Each entity gets a list endpoint and a lookup-by-id endpoint. The storage
//! call is synchronous and runs on the blocking pool.

use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::Json,
    routing::get,
    Router,
};
use gameshelf_model::CatalogEntity;
use gameshelf_storage::{CatalogSource, StorageError, StorageResult};
use thiserror::Error;
use tokio::task::JoinError;
use tracing::{debug, error, warn};

use crate::error::ApiError;

#[derive(Debug, Error)]
enum ReadFailure {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("read task failed: {0}")]
    Task(#[from] JoinError),
}

/// Routes for one entity under `/api/{plural}`.
pub(crate) fn entity_routes<S: CatalogSource, E: CatalogEntity>() -> Router<Arc<S>> {
    let collection = format!("/api/{}", E::PLURAL);
    Router::new()
        .route(&format!("{collection}/"), get(list_entities::<S, E>))
        .route(&collection, get(list_entities::<S, E>))
        .route(&format!("{collection}/{{id}}"), get(get_entity::<S, E>))
}

async fn list_entities<S: CatalogSource, E: CatalogEntity>(
    State(source): State<Arc<S>>,
) -> Result<Json<Vec<E>>, ApiError> {
    match run_blocking(move || source.list::<E>()).await {
        Ok(entities) => {
            debug!("listed {} {}", entities.len(), E::PLURAL);
            Ok(Json(entities))
        }
        Err(failure) => {
            log_failure(E::PLURAL, &failure);
            Err(ApiError::FetchFailed(E::PLURAL))
        }
    }
}

async fn get_entity<S: CatalogSource, E: CatalogEntity>(
    State(source): State<Arc<S>>,
    segment: Result<Path<String>, PathRejection>,
) -> Result<Json<E>, ApiError> {
    let Ok(Path(segment)) = segment else {
        return Err(ApiError::UnknownRoute);
    };
    let id = match parse_id(&segment) {
        IdSegment::Valid(id) => id,
        // Beyond the store's integer range, so no such row.
        IdSegment::OutOfRange => return Err(ApiError::NotFound(E::DISPLAY_NAME)),
        // Anything but plain digits behaves like an unmatched route.
        IdSegment::Invalid => return Err(ApiError::UnknownRoute),
    };

    match run_blocking(move || source.get::<E>(id)).await {
        Ok(Some(entity)) => {
            debug!("fetched {} {}", E::SINGULAR, entity.id());
            Ok(Json(entity))
        }
        Ok(None) => {
            debug!("{} {} not found", E::SINGULAR, id);
            Err(ApiError::NotFound(E::DISPLAY_NAME))
        }
        Err(failure) => {
            log_failure(E::SINGULAR, &failure);
            Err(ApiError::FetchFailed(E::SINGULAR))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IdSegment {
    Valid(i64),
    OutOfRange,
    Invalid,
}

fn parse_id(segment: &str) -> IdSegment {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return IdSegment::Invalid;
    }
    segment.parse::<i64>().map_or(IdSegment::OutOfRange, IdSegment::Valid)
}

pub(crate) async fn unknown_route() -> ApiError {
    ApiError::UnknownRoute
}

async fn run_blocking<T, F>(read: F) -> Result<T, ReadFailure>
where
    F: FnOnce() -> StorageResult<T> + Send + 'static,
    T: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(read).await??)
}

fn log_failure(target: &str, failure: &ReadFailure) {
    match failure {
        ReadFailure::Storage(e) => warn!("failed to fetch {}: {}", target, e),
        ReadFailure::Task(e) => error!("failed to fetch {}: {}", target, e),
    }
}
