//! Catalog data seam.
//!
//! The hosted database sits behind [`CatalogSource`]. Everything downstream
//! works on a fully materialized [`CatalogSnapshot`].

use crate::catalog::{Collection, Product};
use crate::error::CommerceError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Collections and products as loaded for one page view.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub collections: Vec<Collection>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl CatalogSnapshot {
    /// Parse a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the snapshot as pretty JSON.
    pub fn to_json(&self) -> Result<String, CommerceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Source of catalog records.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch all collections.
    async fn collections(&self) -> Result<Vec<Collection>, CommerceError>;

    /// Fetch all products with their options and variants.
    async fn products(&self) -> Result<Vec<Product>, CommerceError>;

    /// Fetch everything needed to render the storefront index.
    async fn load_snapshot(&self) -> Result<CatalogSnapshot, CommerceError> {
        let collections = self.collections().await?;
        let products = self.products().await?;
        tracing::debug!(
            collections = collections.len(),
            products = products.len(),
            "catalog snapshot loaded"
        );
        Ok(CatalogSnapshot {
            collections,
            products,
        })
    }
}

/// In-memory catalog, for tests and pre-rendered pages.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    snapshot: CatalogSnapshot,
}

impl StaticCatalog {
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self { snapshot }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn collections(&self) -> Result<Vec<Collection>, CommerceError> {
        Ok(self.snapshot.collections.clone())
    }

    async fn products(&self) -> Result<Vec<Product>, CommerceError> {
        Ok(self.snapshot.products.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    #[tokio::test]
    async fn test_static_catalog_snapshot() {
        let snapshot = CatalogSnapshot {
            collections: vec![Collection::new("c-1", "Outerwear")],
            products: vec![Product::new(
                "p-1",
                "Trench Coat",
                "trench-coat",
                Money::new(15000, Currency::USD),
            )],
        };
        let source = StaticCatalog::new(snapshot.clone());

        let loaded = source.load_snapshot().await.unwrap();
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn test_snapshot_json_roundtrip_with_missing_sections() {
        let snapshot = CatalogSnapshot::from_json(r#"{"collections": []}"#).unwrap();
        assert!(snapshot.products.is_empty());
        let json = snapshot.to_json().unwrap();
        assert_eq!(CatalogSnapshot::from_json(&json).unwrap(), snapshot);

        let err = CatalogSnapshot::from_json("not json").unwrap_err();
        assert!(matches!(err, CommerceError::SerializationError(_)));
    }
}
