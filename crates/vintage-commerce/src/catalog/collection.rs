//! Collections group products for browsing.

use crate::ids::CollectionId;
use serde::{Deserialize, Serialize};

/// A curated product collection (e.g., "70s Denim").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Collection {
    /// Unique collection identifier.
    pub id: CollectionId,
    /// Display name.
    pub name: String,
    /// Short description.
    #[serde(default)]
    pub description: Option<String>,
    /// Cover image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Whether the collection carries the "Featured" badge.
    #[serde(default)]
    pub featured: bool,
}

impl Collection {
    pub fn new(id: impl Into<CollectionId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            image: None,
            featured: false,
        }
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_deserialize_defaults() {
        let collection: Collection =
            serde_json::from_str(r#"{"id": "c-1", "name": "Outerwear"}"#).unwrap();
        assert_eq!(collection.id.as_str(), "c-1");
        assert!(!collection.featured);
        assert!(collection.image.is_none());
    }
}
