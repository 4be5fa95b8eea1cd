//! Collection browsing state for the storefront index.

use crate::catalog::{CatalogSnapshot, Collection, Product};
use crate::error::CommerceError;
use crate::ids::CollectionId;

/// Heading shown when no collection is selected.
pub const ALL_PRODUCTS_HEADING: &str = "Featured Vintage Finds";

/// Heading shown when the selected collection is not in the catalog.
pub const UNKNOWN_COLLECTION_HEADING: &str = "Collection";

/// Index page state: the catalog plus an optional collection filter.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    collections: Vec<Collection>,
    products: Vec<Product>,
    selected_collection: Option<CollectionId>,
}

impl CatalogIndex {
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self {
            collections: snapshot.collections,
            products: snapshot.products,
            selected_collection: None,
        }
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn featured_collections(&self) -> impl Iterator<Item = &Collection> {
        self.collections.iter().filter(|c| c.featured)
    }

    pub fn selected_collection(&self) -> Option<&CollectionId> {
        self.selected_collection.as_ref()
    }

    /// Narrow the product grid to one collection ("View Products").
    pub fn view_collection(&mut self, collection_id: CollectionId) {
        tracing::debug!(collection = %collection_id, "viewing collection");
        self.selected_collection = Some(collection_id);
    }

    /// Like [`view_collection`](Self::view_collection) but rejects unknown IDs.
    pub fn try_view_collection(&mut self, collection_id: CollectionId) -> Result<(), CommerceError> {
        if self.collection(&collection_id).is_none() {
            return Err(CommerceError::CollectionNotFound(collection_id.to_string()));
        }
        self.view_collection(collection_id);
        Ok(())
    }

    /// Clear the collection filter ("See All Products").
    pub fn show_all(&mut self) {
        self.selected_collection = None;
    }

    pub fn collection(&self, id: &CollectionId) -> Option<&Collection> {
        self.collections.iter().find(|c| &c.id == id)
    }

    /// Products in the grid, in catalog order.
    pub fn filtered_products(&self) -> Vec<&Product> {
        match &self.selected_collection {
            None => self.products.iter().collect(),
            Some(id) => self.products.iter().filter(|p| p.in_collection(id)).collect(),
        }
    }

    /// Grid heading for the current filter.
    pub fn heading(&self) -> &str {
        match &self.selected_collection {
            None => ALL_PRODUCTS_HEADING,
            Some(id) => self
                .collection(id)
                .map(|c| c.name.as_str())
                .unwrap_or(UNKNOWN_COLLECTION_HEADING),
        }
    }

    /// Message for an empty grid, if the grid is empty.
    pub fn empty_message(&self) -> Option<&'static str> {
        if self.filtered_products().is_empty() {
            Some("No products available in this collection.")
        } else {
            None
        }
    }

    pub fn find_product(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug == slug)
    }

    /// Like [`find_product`](Self::find_product) but errors on unknown slugs.
    pub fn try_find_product(&self, slug: &str) -> Result<&Product, CommerceError> {
        self.find_product(slug)
            .ok_or_else(|| CommerceError::ProductNotFound(slug.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn product(id: &str, collections: &[&str]) -> Product {
        let mut p = Product::new(id, id.to_uppercase(), id, Money::new(1000, Currency::USD));
        for c in collections {
            p.add_collection(CollectionId::new(*c));
        }
        p
    }

    fn index() -> CatalogIndex {
        CatalogIndex::new(CatalogSnapshot {
            collections: vec![
                Collection::new("denim", "Denim").featured(),
                Collection::new("knits", "Knitwear"),
            ],
            products: vec![
                product("jeans", &["denim"]),
                product("cardigan", &["knits"]),
                product("jacket", &["denim", "knits"]),
            ],
        })
    }

    fn slugs(products: Vec<&Product>) -> Vec<&str> {
        products.into_iter().map(|p| p.slug.as_str()).collect()
    }

    #[test]
    fn test_all_products_by_default() {
        let index = index();
        assert_eq!(slugs(index.filtered_products()), vec!["jeans", "cardigan", "jacket"]);
        assert_eq!(index.heading(), ALL_PRODUCTS_HEADING);
    }

    #[test]
    fn test_view_collection_filters_in_order() {
        let mut index = index();
        index.view_collection(CollectionId::new("denim"));
        assert_eq!(slugs(index.filtered_products()), vec!["jeans", "jacket"]);
        assert_eq!(index.heading(), "Denim");

        index.show_all();
        assert_eq!(index.filtered_products().len(), 3);
    }

    #[test]
    fn test_unknown_collection() {
        let mut index = index();
        index.view_collection(CollectionId::new("shoes"));
        assert_eq!(index.heading(), UNKNOWN_COLLECTION_HEADING);
        assert!(index.empty_message().is_some());

        let err = index.try_view_collection(CollectionId::new("hats")).unwrap_err();
        assert!(matches!(err, CommerceError::CollectionNotFound(_)));
    }

    #[test]
    fn test_featured_and_lookup() {
        let index = index();
        let featured: Vec<_> = index.featured_collections().map(|c| c.name.as_str()).collect();
        assert_eq!(featured, vec!["Denim"]);
        assert!(index.find_product("cardigan").is_some());
        assert!(index.find_product("boots").is_none());
        assert!(matches!(
            index.try_find_product("boots"),
            Err(CommerceError::ProductNotFound(slug)) if slug == "boots"
        ));
    }
}
