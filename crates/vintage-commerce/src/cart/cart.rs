//! Cart and line item types.

use crate::error::CommerceError;
use crate::ids::{CartId, LineItemId, ProductId, VariantId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 99;

/// A shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Unique cart identifier.
    pub id: CartId,
    /// Items in the cart.
    pub items: Vec<LineItem>,
    /// Cart currency.
    pub currency: Currency,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(currency: Currency) -> Self {
        let now = current_timestamp();
        Self {
            id: CartId::generate(),
            items: Vec::new(),
            currency,
            created_at: now,
            updated_at: now,
        }
    }

    /// Add an item to the cart, merging with an existing line for the same variant.
    ///
    /// Returns an error if:
    /// - Quantity is not positive
    /// - The resulting quantity exceeds MAX_QUANTITY_PER_ITEM
    /// - The price currency differs from the cart currency
    /// - Arithmetic overflow would occur
    pub fn add_item(&mut self, item: NewLineItem, quantity: i64) -> Result<LineItemId, CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        if item.unit_price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: item.unit_price.currency.code().to_string(),
            });
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.variant_id == item.variant_id) {
            let new_quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;

            if new_quantity > MAX_QUANTITY_PER_ITEM {
                return Err(CommerceError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_ITEM,
                ));
            }

            existing.quantity = new_quantity;
            existing.update_total()?;
            self.updated_at = current_timestamp();
            return Ok(existing.id.clone());
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        let line = LineItem::new(item, quantity)?;
        let id = line.id.clone();
        tracing::debug!(cart = %self.id, variant = %line.variant_id, quantity, "line item added");
        self.items.push(line);
        self.updated_at = current_timestamp();
        Ok(id)
    }

    /// Update item quantity.
    ///
    /// If quantity is <= 0, removes the item.
    pub fn update_quantity(
        &mut self,
        line_item_id: &LineItemId,
        quantity: i64,
    ) -> Result<(), CommerceError> {
        if quantity <= 0 {
            return if self.remove_item(line_item_id) {
                Ok(())
            } else {
                Err(CommerceError::ItemNotInCart(line_item_id.to_string()))
            };
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        let item = self
            .items
            .iter_mut()
            .find(|i| &i.id == line_item_id)
            .ok_or_else(|| CommerceError::ItemNotInCart(line_item_id.to_string()))?;
        item.quantity = quantity;
        item.update_total()?;
        self.updated_at = current_timestamp();
        Ok(())
    }

    /// Remove an item from the cart.
    pub fn remove_item(&mut self, line_item_id: &LineItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != line_item_id);
        let removed = self.items.len() < len_before;
        if removed {
            self.updated_at = current_timestamp();
        }
        removed
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.updated_at = current_timestamp();
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of line totals.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        Money::try_sum(self.items.iter().map(|i| &i.total_price), self.currency)
            .ok_or(CommerceError::Overflow)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

/// What the product card hands to the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLineItem {
    pub variant_id: VariantId,
    pub product_id: ProductId,
    pub product_title: String,
    /// E.g., "Red / M"; `None` for single-SKU products.
    pub variant_title: Option<String>,
    pub unit_price: Money,
    pub image: Option<String>,
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Unique line item identifier.
    pub id: LineItemId,
    /// Variant being purchased.
    pub variant_id: VariantId,
    /// Product ID.
    pub product_id: ProductId,
    /// Product title (denormalized for display).
    pub product_title: String,
    /// Variant title (e.g., "Red / M").
    pub variant_title: Option<String>,
    /// Thumbnail URL.
    pub image: Option<String>,
    /// Quantity.
    pub quantity: i64,
    /// Unit price.
    pub unit_price: Money,
    /// Total price (unit_price * quantity).
    pub total_price: Money,
}

impl LineItem {
    fn new(item: NewLineItem, quantity: i64) -> Result<Self, CommerceError> {
        let total_price = item
            .unit_price
            .try_multiply(quantity)
            .ok_or(CommerceError::Overflow)?;
        Ok(Self {
            id: LineItemId::generate(),
            variant_id: item.variant_id,
            product_id: item.product_id,
            product_title: item.product_title,
            variant_title: item.variant_title,
            image: item.image,
            quantity,
            unit_price: item.unit_price,
            total_price,
        })
    }

    /// Update the total price based on quantity.
    fn update_total(&mut self) -> Result<(), CommerceError> {
        self.total_price = self
            .unit_price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)?;
        Ok(())
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(variant: &str, cents: i64) -> NewLineItem {
        NewLineItem {
            variant_id: VariantId::new(variant),
            product_id: ProductId::new("prod-1"),
            product_title: "Test Product".to_string(),
            variant_title: None,
            unit_price: Money::new(cents, Currency::USD),
            image: None,
        }
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new(Currency::USD);
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal().unwrap().amount_cents, 0);
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = Cart::default();
        let first = cart.add_item(item("var-1", 1000), 1).unwrap();
        let second = cart.add_item(item("var-1", 1000), 2).unwrap();

        assert_eq!(first, second);
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.subtotal().unwrap().amount_cents, 3000);
    }

    #[test]
    fn test_update_and_remove() {
        let mut cart = Cart::default();
        let line_id = cart.add_item(item("var-1", 1000), 1).unwrap();

        cart.update_quantity(&line_id, 5).unwrap();
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.items[0].total_price.amount_cents, 5000);

        cart.update_quantity(&line_id, 0).unwrap();
        assert!(cart.is_empty());
        assert!(cart.update_quantity(&line_id, 2).is_err());
    }

    #[test]
    fn test_subtotal_across_lines() {
        let mut cart = Cart::default();
        cart.add_item(item("var-1", 1000), 2).unwrap();
        cart.add_item(item("var-2", 2000), 1).unwrap();
        assert_eq!(cart.subtotal().unwrap().amount_cents, 4000);

        cart.clear();
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_quantity_limits() {
        let mut cart = Cart::default();
        assert!(matches!(
            cart.add_item(item("var-1", 1000), 0),
            Err(CommerceError::InvalidQuantity(0))
        ));
        assert!(matches!(
            cart.add_item(item("var-1", 1000), MAX_QUANTITY_PER_ITEM + 1),
            Err(CommerceError::QuantityExceedsLimit(_, _))
        ));

        cart.add_item(item("var-1", 1000), MAX_QUANTITY_PER_ITEM).unwrap();
        assert!(cart.add_item(item("var-1", 1000), 1).is_err());
        assert_eq!(cart.item_count(), MAX_QUANTITY_PER_ITEM);
    }

    #[test]
    fn test_currency_mismatch() {
        let mut cart = Cart::new(Currency::EUR);
        let err = cart.add_item(item("var-1", 1000), 1).unwrap_err();
        assert!(matches!(err, CommerceError::CurrencyMismatch { .. }));
    }
}
