//! Price, stock, and image state shown on a product card.

use crate::catalog::{Product, Variant};
use crate::ids::VariantId;
use crate::money::Money;
use serde::Serialize;

/// Where a display record's fields came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplaySource {
    /// The variant matching a complete selection.
    Matched,
    /// The first in-stock (or first) variant, selection incomplete.
    Fallback,
    /// Product-level defaults; the product has no usable variants.
    Product,
}

/// What the card shows for the current selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRecord {
    /// Never negative.
    pub price: Money,
    pub compare_at_price: Option<Money>,
    pub in_stock: bool,
    pub image: Option<String>,
    /// Present iff `compare_at_price > price`; always in `1..=100`.
    pub discount_percentage: Option<u8>,
    pub variant_id: Option<VariantId>,
    pub source: DisplaySource,
}

impl DisplayRecord {
    pub(crate) fn from_variant(product: &Product, variant: &Variant, source: DisplaySource) -> Self {
        let price = variant.price.non_negative();
        Self {
            price,
            compare_at_price: variant.compare_at_price,
            in_stock: variant.is_in_stock(),
            image: variant
                .image
                .clone()
                .or_else(|| product.primary_image().map(str::to_string)),
            discount_percentage: discount_percentage(&price, variant.compare_at_price.as_ref()),
            variant_id: Some(variant.id.clone()),
            source,
        }
    }

    pub(crate) fn from_product(product: &Product) -> Self {
        let price = product.price.non_negative();
        Self {
            price,
            compare_at_price: product.compare_at_price,
            in_stock: product.variants.is_empty() && product.stock_quantity > 0,
            image: product.primary_image().map(str::to_string),
            discount_percentage: discount_percentage(&price, product.compare_at_price.as_ref()),
            variant_id: None,
            source: DisplaySource::Product,
        }
    }

    /// Whether a struck-through compare-at price should be shown.
    pub fn is_on_sale(&self) -> bool {
        self.discount_percentage.is_some()
    }

    /// Formatted current price (e.g., "$90.00").
    pub fn format_price(&self) -> String {
        self.price.display()
    }

    /// Formatted compare-at price, only when it exceeds the current price.
    pub fn format_compare_at(&self) -> Option<String> {
        self.compare_at_price
            .filter(|_| self.is_on_sale())
            .map(|cap| cap.display())
    }
}

/// Percentage saved against the compare-at price, rounded half up.
///
/// A negative price counts as zero. `None` unless `compare_at` exceeds that
/// in the same currency, so a zero or negative compare-at never yields a
/// discount. A saving too small to round to 1% still reports 1 so the badge
/// never reads "-0%".
pub fn discount_percentage(price: &Money, compare_at: Option<&Money>) -> Option<u8> {
    let compare_at = compare_at?;
    let charged = price.amount_cents.max(0);
    if compare_at.currency != price.currency || compare_at.amount_cents <= charged {
        return None;
    }

    let base = i128::from(compare_at.amount_cents);
    let savings = base - i128::from(charged);
    let rounded = (savings * 200 + base) / (base * 2);
    Some(rounded.clamp(1, 100) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    #[test]
    fn test_discount_percentage_examples() {
        assert_eq!(discount_percentage(&usd(80), Some(&usd(100))), Some(20));
        assert_eq!(discount_percentage(&usd(2000), Some(&usd(3000))), Some(33));
        assert_eq!(discount_percentage(&usd(1000), Some(&usd(3000))), Some(67));
        assert_eq!(discount_percentage(&usd(0), Some(&usd(3000))), Some(100));
    }

    #[test]
    fn test_discount_with_zero_or_negative_amounts() {
        assert_eq!(discount_percentage(&usd(-5), Some(&usd(0))), None);
        assert_eq!(discount_percentage(&usd(-100), Some(&usd(-50))), None);
        assert_eq!(discount_percentage(&usd(0), Some(&usd(-50))), None);
        assert_eq!(discount_percentage(&usd(-100), Some(&usd(2000))), Some(100));
        assert_eq!(discount_percentage(&usd(i64::MIN), Some(&usd(i64::MAX))), Some(100));
    }

    #[test]
    fn test_discount_absent_unless_compare_at_exceeds_price() {
        assert_eq!(discount_percentage(&usd(100), None), None);
        assert_eq!(discount_percentage(&usd(100), Some(&usd(100))), None);
        assert_eq!(discount_percentage(&usd(100), Some(&usd(90))), None);
        let eur = Money::new(200, Currency::EUR);
        assert_eq!(discount_percentage(&usd(100), Some(&eur)), None);
    }

    #[test]
    fn test_tiny_discount_reports_at_least_one_percent() {
        assert_eq!(discount_percentage(&usd(99_999), Some(&usd(100_000))), Some(1));
    }

    #[test]
    fn test_discount_always_in_range() {
        for cap in 1..=300 {
            for price in 0..cap {
                let pct = discount_percentage(&usd(price), Some(&usd(cap))).unwrap();
                assert!((1..=100).contains(&pct), "price={} cap={} pct={}", price, cap, pct);
            }
        }
    }

    #[test]
    fn test_product_fallback_record() {
        let mut product = Product::new("p-1", "Scarf", "scarf", usd(-100));
        product.images = vec!["scarf.jpg".to_string()];
        product.stock_quantity = 2;

        let record = DisplayRecord::from_product(&product);
        assert_eq!(record.price.amount_cents, 0);
        assert!(record.in_stock);
        assert_eq!(record.image.as_deref(), Some("scarf.jpg"));
        assert_eq!(record.source, DisplaySource::Product);
    }

    #[test]
    fn test_variant_record_formats_compare_at_only_on_sale() {
        let product = Product::new("p-1", "Coat", "coat", usd(0));
        let on_sale = Variant::new("v-1", usd(8000), 1).with_compare_at(usd(10000));
        let record = DisplayRecord::from_variant(&product, &on_sale, DisplaySource::Matched);
        assert_eq!(record.format_price(), "$80.00");
        assert_eq!(record.format_compare_at().as_deref(), Some("$100.00"));

        let not_on_sale = Variant::new("v-2", usd(8000), 1).with_compare_at(usd(5000));
        let record = DisplayRecord::from_variant(&product, &not_on_sale, DisplaySource::Matched);
        assert!(record.format_compare_at().is_none());
    }
}
