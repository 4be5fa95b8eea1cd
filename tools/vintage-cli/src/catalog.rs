//! Catalog snapshot loading from disk.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use async_trait::async_trait;
use vintage_commerce::catalog::{CatalogSnapshot, CatalogSource, Collection, Product};
use vintage_commerce::CommerceError;

/// Catalog source backed by a JSON snapshot file.
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<CatalogSnapshot, CommerceError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CommerceError::SourceError(format!("{}: {}", self.path.display(), e)))?;
        CatalogSnapshot::from_json(&content)
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn collections(&self) -> Result<Vec<Collection>, CommerceError> {
        Ok(self.read().await?.collections)
    }

    async fn products(&self) -> Result<Vec<Product>, CommerceError> {
        Ok(self.read().await?.products)
    }

    async fn load_snapshot(&self) -> Result<CatalogSnapshot, CommerceError> {
        // One read instead of one per section.
        self.read().await
    }
}

/// Load the catalog at `path`.
pub async fn load(path: &Path) -> Result<CatalogSnapshot> {
    let source = JsonFileCatalog::new(path);
    let snapshot = source
        .load_snapshot()
        .await
        .with_context(|| format!("Failed to load catalog: {}", source.path().display()))?;
    tracing::info!(
        path = %source.path().display(),
        collections = snapshot.collections.len(),
        products = snapshot.products.len(),
        "catalog loaded"
    );
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_is_source_error() {
        let source = JsonFileCatalog::new("/nonexistent/catalog.json");
        let err = source.load_snapshot().await.unwrap_err();
        assert!(matches!(err, CommerceError::SourceError(_)));
    }

    #[tokio::test]
    async fn test_load_snapshot_from_file() {
        let path = std::env::temp_dir().join(format!("vintage-catalog-{}.json", std::process::id()));
        tokio::fs::write(&path, r#"{"collections": [{"id": "c-1", "name": "Denim"}]}"#)
            .await
            .unwrap();

        let snapshot = load(&path).await.unwrap();
        assert_eq!(snapshot.collections.len(), 1);
        assert!(snapshot.products.is_empty());

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_demo_catalog_is_clean() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/catalog.json");
        let snapshot = load(&path).await.unwrap();
        assert_eq!(snapshot.products.len(), 4);
        for product in &snapshot.products {
            let faults = vintage_commerce::catalog::check_product(product);
            assert!(faults.is_empty(), "{}: {:?}", product.slug, faults);
        }
    }
}
