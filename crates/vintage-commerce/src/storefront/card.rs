//! Product card view model.
//!
//! Wraps a [`VariantResolver`] with the per-card selection state and the
//! badge/button logic the card template reads.

use crate::cart::{Cart, NewLineItem};
use crate::catalog::{Product, Variant};
use crate::error::CommerceError;
use crate::ids::{LineItemId, VariantId};
use crate::storefront::text::strip_html;
use crate::variant::{
    DisplayRecord, OptionRow, Selection, SelectionPolicy, SwatchTable, VariantResolver,
};
use serde::Serialize;

/// Badge shown over the card image, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "percent", rename_all = "snake_case")]
pub enum Badge {
    Discount(u8),
    Featured,
    OutOfStock,
}

impl Badge {
    pub fn label(&self) -> String {
        match self {
            Badge::Discount(pct) => format!("-{}%", pct),
            Badge::Featured => "Featured".to_string(),
            Badge::OutOfStock => "Out of stock".to_string(),
        }
    }
}

/// State of one product card for the lifetime of its display.
#[derive(Debug, Clone)]
pub struct ProductCard<'a> {
    resolver: VariantResolver<'a>,
    selection: Selection,
    policy: SelectionPolicy,
}

impl<'a> ProductCard<'a> {
    /// A card with an empty selection and the default policy.
    pub fn new(product: &'a Product) -> Self {
        Self::from_resolver(VariantResolver::new(product), SelectionPolicy::default())
    }

    pub fn with_swatches(product: &'a Product, swatches: &'a SwatchTable, policy: SelectionPolicy) -> Self {
        Self::from_resolver(VariantResolver::with_swatches(product, swatches), policy)
    }

    fn from_resolver(resolver: VariantResolver<'a>, policy: SelectionPolicy) -> Self {
        Self {
            resolver,
            selection: Selection::new(),
            policy,
        }
    }

    pub fn product(&self) -> &'a Product {
        self.resolver.product()
    }

    pub fn resolver(&self) -> &VariantResolver<'a> {
        &self.resolver
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Handle a click on an option value.
    pub fn select(&mut self, option_name: &str, value: &str) {
        self.selection =
            self.resolver
                .apply_option_change(&self.selection, option_name, value, self.policy);
        tracing::debug!(
            product = %self.product().id,
            option = option_name,
            value,
            complete = self.selection.is_complete(self.product()),
            "option selected"
        );
    }

    /// Whether the card shows option rows.
    pub fn has_variants(&self) -> bool {
        self.product().has_options()
    }

    pub fn matched_variant(&self) -> Option<&'a Variant> {
        self.resolver.match_variant(&self.selection)
    }

    pub fn display(&self) -> DisplayRecord {
        self.resolver.effective_display(self.matched_variant())
    }

    pub fn option_rows(&self) -> Vec<OptionRow> {
        self.resolver.option_rows(&self.selection)
    }

    pub fn badges(&self) -> Vec<Badge> {
        let display = self.display();
        let mut badges = Vec::new();
        if let Some(pct) = display.discount_percentage {
            badges.push(Badge::Discount(pct));
        }
        if self.product().featured {
            badges.push(Badge::Featured);
        }
        if !display.in_stock {
            badges.push(Badge::OutOfStock);
        }
        badges
    }

    /// A product with options needs a matched in-stock variant; one without
    /// options needs stock on its implicit variant or at product level.
    pub fn can_add_to_cart(&self) -> bool {
        if self.has_variants() {
            return self.matched_variant().is_some_and(Variant::is_in_stock);
        }
        self.display().in_stock
    }

    pub fn cart_label(&self) -> &'static str {
        if self.display().in_stock {
            "Add to Cart"
        } else {
            "Sold Out"
        }
    }

    /// Add the current variant to `cart`.
    pub fn add_to_cart(&self, cart: &mut Cart, quantity: i64) -> Result<LineItemId, CommerceError> {
        let product = self.product();
        if !self.can_add_to_cart() {
            let reason = if self.has_variants() && self.matched_variant().is_none() {
                format!("{}: select all options first", product.slug)
            } else {
                format!("{}: sold out", product.slug)
            };
            return Err(CommerceError::NotPurchasable(reason));
        }

        let display = self.display();
        // Purchasable cards always resolve to a concrete variant except
        // single-SKU products served without one.
        let (variant_id, variant_title) = match self.matched_variant() {
            Some(v) if product.has_options() => (v.id.clone(), Some(v.title(product))),
            Some(v) => (v.id.clone(), None),
            None => (VariantId::new(product.id.as_str()), None),
        };

        cart.add_item(
            NewLineItem {
                variant_id,
                product_id: product.id.clone(),
                product_title: product.title.clone(),
                variant_title,
                unit_price: display.price,
                image: display.image,
            },
            quantity,
        )
    }

    /// Link target for the card.
    pub fn href(&self) -> String {
        format!("/products/{}", self.product().slug)
    }

    /// Description with markup removed.
    pub fn plain_description(&self) -> Option<String> {
        self.product()
            .description
            .as_deref()
            .map(strip_html)
            .filter(|text| !text.is_empty())
    }
}
