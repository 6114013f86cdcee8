//! SQLite storage layer for gameshelf.
//!
//! Provides read access to catalog entities (categories and publishers).
//! Rows are populated by whatever administrative process owns the database;
//! this crate only ensures the tables exist and queries them.
//!
//! # Architecture
//!
//! - [`CatalogSource`] is the read seam the HTTP layer depends on
//! - [`CatalogStore`] implements it over a single mutex-guarded connection
//! - Queries are generic over [`gameshelf_model::CatalogEntity`]

mod catalog_store;
mod error;

pub use catalog_store::{CatalogSource, CatalogStore};
pub use error::{StorageError, StorageResult};
