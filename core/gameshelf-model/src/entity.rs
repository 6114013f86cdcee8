use serde::{Deserialize, Serialize};

/// A row-backed catalog record with the `{id, name, description}` shape.
///
/// Implementors serialize to exactly those three keys. `description` is
/// always present in the output and is `null` when the row has none.
pub trait CatalogEntity: Serialize + Send + Sync + Sized + 'static {
    /// Table holding the rows for this entity.
    const TABLE: &'static str;

    /// Lowercase singular noun, e.g. "category".
    const SINGULAR: &'static str;

    /// Lowercase plural noun, also the collection path segment, e.g. "categories".
    const PLURAL: &'static str;

    /// Capitalized name used in not-found messages, e.g. "Category".
    const DISPLAY_NAME: &'static str;

    /// Builds the entity from its column values.
    fn from_columns(id: i64, name: String, description: Option<String>) -> Self;

    /// Primary key.
    fn id(&self) -> i64;
}

/// A game category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl CatalogEntity for Category {
    const TABLE: &'static str = "categories";
    const SINGULAR: &'static str = "category";
    const PLURAL: &'static str = "categories";
    const DISPLAY_NAME: &'static str = "Category";

    fn from_columns(id: i64, name: String, description: Option<String>) -> Self {
        Self { id, name, description }
    }

    fn id(&self) -> i64 {
        self.id
    }
}

/// A game publisher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publisher {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl CatalogEntity for Publisher {
    const TABLE: &'static str = "publishers";
    const SINGULAR: &'static str = "publisher";
    const PLURAL: &'static str = "publishers";
    const DISPLAY_NAME: &'static str = "Publisher";

    fn from_columns(id: i64, name: String, description: Option<String>) -> Self {
        Self { id, name, description }
    }

    fn id(&self) -> i64 {
        self.id
    }
}
