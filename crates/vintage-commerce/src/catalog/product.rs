//! Product, option, and variant types.

use crate::ids::{CollectionId, ProductId, VariantId};
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A product as served by the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// URL-friendly slug (unique).
    pub slug: String,
    /// Description; may contain HTML.
    #[serde(default)]
    pub description: Option<String>,
    /// Image URLs in display order.
    #[serde(default)]
    pub images: Vec<String>,
    /// Whether the product is flagged as featured.
    #[serde(default)]
    pub featured: bool,
    /// Choice dimensions (e.g., Color, Size). Empty for single-SKU products.
    #[serde(default)]
    pub options: Vec<ProductOption>,
    /// Purchasable variants in declared order.
    #[serde(default)]
    pub variants: Vec<Variant>,
    /// Product-level price, used when the product has no variants.
    pub price: Money,
    /// Product-level compare-at price.
    #[serde(default)]
    pub compare_at_price: Option<Money>,
    /// Product-level stock, used when the product has no variants.
    #[serde(default)]
    pub stock_quantity: u32,
    /// Collections this product belongs to.
    #[serde(default)]
    pub collection_ids: Vec<CollectionId>,
}

impl Product {
    /// Create a product with no options or variants.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        slug: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            slug: slug.into(),
            description: None,
            images: Vec::new(),
            featured: false,
            options: Vec::new(),
            variants: Vec::new(),
            price,
            compare_at_price: None,
            stock_quantity: 0,
            collection_ids: Vec::new(),
        }
    }

    /// Check if the product declares any option dimensions.
    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }

    /// Look up an option by name.
    pub fn option(&self, name: &str) -> Option<&ProductOption> {
        self.options.iter().find(|o| o.name == name)
    }

    /// Look up a variant by ID.
    pub fn variant(&self, id: &VariantId) -> Option<&Variant> {
        self.variants.iter().find(|v| &v.id == id)
    }

    /// Check membership in a collection.
    pub fn in_collection(&self, collection_id: &CollectionId) -> bool {
        self.collection_ids.contains(collection_id)
    }

    /// Add the product to a collection.
    pub fn add_collection(&mut self, collection_id: CollectionId) {
        if !self.in_collection(&collection_id) {
            self.collection_ids.push(collection_id);
        }
    }

    /// First image URL, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// A named choice dimension with ordered values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductOption {
    /// Option name (e.g., "Color").
    pub name: String,
    /// Possible values in display order.
    pub values: Vec<String>,
    /// Value to color mapping. Its presence marks the option as swatch-capable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swatches: Option<BTreeMap<String, String>>,
}

impl ProductOption {
    pub fn new(name: impl Into<String>, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
            swatches: None,
        }
    }

    /// Attach swatch colors, marking the option as swatch-capable.
    pub fn with_swatches(
        mut self,
        swatches: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
    ) -> Self {
        self.swatches = Some(
            swatches
                .into_iter()
                .map(|(value, color)| (value.into(), color.into()))
                .collect(),
        );
        self
    }

    /// Whether values of this option render as color swatches.
    pub fn has_swatch(&self) -> bool {
        self.swatches.is_some()
    }

    /// Check if a value is declared on this option.
    pub fn declares(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// The option's own swatch color for a value.
    pub fn swatch(&self, value: &str) -> Option<&str> {
        self.swatches
            .as_ref()
            .and_then(|s| s.get(value))
            .map(String::as_str)
    }
}

/// One purchasable combination of option values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Variant {
    /// Unique variant identifier.
    pub id: VariantId,
    /// Option name to chosen value, one entry per product option.
    #[serde(default)]
    pub options: BTreeMap<String, String>,
    /// Price of this variant.
    pub price: Money,
    /// Compare-at price (original price for showing discounts).
    #[serde(default)]
    pub compare_at_price: Option<Money>,
    /// Units on hand. Zero means visible but not purchasable.
    #[serde(default)]
    pub stock_quantity: u32,
    /// Variant-specific image URL.
    #[serde(default)]
    pub image: Option<String>,
}

impl Variant {
    pub fn new(id: impl Into<VariantId>, price: Money, stock_quantity: u32) -> Self {
        Self {
            id: id.into(),
            options: BTreeMap::new(),
            price,
            compare_at_price: None,
            stock_quantity,
            image: None,
        }
    }

    /// Builder-style option assignment.
    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }

    pub fn with_compare_at(mut self, compare_at: Money) -> Self {
        self.compare_at_price = Some(compare_at);
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    /// Check if this variant is in stock.
    pub fn is_in_stock(&self) -> bool {
        self.stock_quantity > 0
    }

    /// The value this variant carries for an option.
    pub fn value_of(&self, option_name: &str) -> Option<&str> {
        self.options.get(option_name).map(String::as_str)
    }

    /// Variant name built from option values in the product's option order
    /// (e.g., "Red / M").
    pub fn title(&self, product: &Product) -> String {
        if product.options.is_empty() {
            return "Default".to_string();
        }
        product
            .options
            .iter()
            .filter_map(|o| self.value_of(&o.name))
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    #[test]
    fn test_product_creation() {
        let product = Product::new("p-1", "Levi's 501", "levis-501", usd(6500));
        assert_eq!(product.slug, "levis-501");
        assert!(!product.has_options());
        assert!(product.primary_image().is_none());
    }

    #[test]
    fn test_collection_membership() {
        let mut product = Product::new("p-1", "Denim Jacket", "denim-jacket", usd(9000));
        product.add_collection(CollectionId::new("denim"));
        product.add_collection(CollectionId::new("denim"));
        assert_eq!(product.collection_ids.len(), 1);
        assert!(product.in_collection(&CollectionId::new("denim")));
    }

    #[test]
    fn test_option_swatch_capability() {
        let size = ProductOption::new("Size", ["S", "M"]);
        assert!(!size.has_swatch());

        let color = ProductOption::new("Color", ["Red"]).with_swatches([("Red", "#b91c1c")]);
        assert!(color.has_swatch());
        assert_eq!(color.swatch("Red"), Some("#b91c1c"));
        assert_eq!(color.swatch("Blue"), None);
    }

    #[test]
    fn test_variant_title_follows_option_order() {
        let mut product = Product::new("p-1", "Jacket", "jacket", usd(100));
        product.options = vec![
            ProductOption::new("Color", ["Red"]),
            ProductOption::new("Size", ["M"]),
        ];
        let variant = Variant::new("v-1", usd(100), 1)
            .with_option("Size", "M")
            .with_option("Color", "Red");
        assert_eq!(variant.title(&product), "Red / M");
    }

    #[test]
    fn test_product_deserialize_minimal() {
        let json = r#"{
            "id": "p-9",
            "title": "Silk Scarf",
            "slug": "silk-scarf",
            "price": {"amount_cents": 4500, "currency": "USD"}
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.variants.is_empty());
        assert!(!product.featured);
        assert_eq!(product.stock_quantity, 0);
    }
}
