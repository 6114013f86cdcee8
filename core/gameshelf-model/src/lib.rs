//! Catalog entity types for gameshelf.
//!
//! Categories and publishers share the same `{id, name, description}` shape.
//! The [`CatalogEntity`] trait captures that shape together with the table
//! each entity lives in and the labels used in API messages, so readers can
//! be written once and instantiated per entity.

mod entity;

pub use entity::{CatalogEntity, Category, Publisher};
