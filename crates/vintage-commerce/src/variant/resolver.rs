//! Variant resolution for a product card.

use crate::catalog::{check_product, is_well_formed, IntegrityFault, Product, Variant};
use crate::variant::controls::{OptionControl, OptionRow};
use crate::variant::display::{DisplayRecord, DisplaySource};
use crate::variant::selection::{handle_option_change, Selection, SelectionPolicy};
use crate::variant::swatch::{SwatchTable, EMPTY_SWATCHES};
use std::collections::HashSet;

/// Resolves selections against one product's variants.
///
/// Construction runs the integrity checks once and logs each fault at warn
/// level. Variants with a disqualifying fault are never matched, counted as
/// available, or used as a display fallback. All queries are pure.
#[derive(Debug, Clone)]
pub struct VariantResolver<'a> {
    product: &'a Product,
    swatches: &'a SwatchTable,
    matchable: Vec<bool>,
    faults: Vec<IntegrityFault>,
}

impl<'a> VariantResolver<'a> {
    pub fn new(product: &'a Product) -> Self {
        Self::with_swatches(product, &EMPTY_SWATCHES)
    }

    /// Resolver that falls back to `swatches` for swatch colors.
    pub fn with_swatches(product: &'a Product, swatches: &'a SwatchTable) -> Self {
        let faults = check_product(product);
        for fault in &faults {
            tracing::warn!(product = %product.id, %fault, "catalog integrity fault");
        }

        let matchable = product
            .variants
            .iter()
            .map(|v| is_well_formed(product, v))
            .collect();

        Self {
            product,
            swatches,
            matchable,
            faults,
        }
    }

    pub fn product(&self) -> &'a Product {
        self.product
    }

    /// Integrity faults found at construction.
    pub fn faults(&self) -> &[IntegrityFault] {
        &self.faults
    }

    /// Well-formed variants in declared order.
    fn candidates(&self) -> impl Iterator<Item = &'a Variant> + '_ {
        self.product
            .variants
            .iter()
            .zip(&self.matchable)
            .filter(|(_, ok)| **ok)
            .map(|(v, _)| v)
    }

    /// Whether `variant` agrees with every chosen value, ignoring `skip`.
    fn agrees(&self, variant: &Variant, selection: &Selection, skip: Option<&str>) -> bool {
        self.product
            .options
            .iter()
            .filter(|o| Some(o.name.as_str()) != skip)
            .all(|o| match selection.get(&o.name) {
                Some(chosen) => variant.value_of(&o.name) == Some(chosen),
                None => true,
            })
    }

    /// Values of `option_name` that some in-stock variant offers under the
    /// other options' current choices, in declared order.
    ///
    /// An option the product does not declare has no available values.
    pub fn available_values(&self, option_name: &str, selection: &Selection) -> Vec<&'a str> {
        let Some(option) = self.product.option(option_name) else {
            return Vec::new();
        };

        let mut seen = HashSet::new();
        option
            .values
            .iter()
            .map(String::as_str)
            .filter(|value| seen.insert(*value))
            .filter(|value| self.is_value_available(option_name, value, selection))
            .collect()
    }

    /// Single-value form of [`available_values`](Self::available_values).
    pub fn is_value_available(&self, option_name: &str, value: &str, selection: &Selection) -> bool {
        self.candidates().any(|v| {
            v.is_in_stock()
                && v.value_of(option_name) == Some(value)
                && self.agrees(v, selection, Some(option_name))
        })
    }

    /// The variant for a complete selection.
    ///
    /// Products without options resolve to their implicit (first) variant
    /// regardless of selection. Duplicate combinations resolve to the first
    /// in declared order.
    pub fn match_variant(&self, selection: &Selection) -> Option<&'a Variant> {
        if !self.product.has_options() {
            return self.candidates().next();
        }
        if !selection.is_complete(self.product) {
            return None;
        }
        self.candidates().find(|v| self.agrees(v, selection, None))
    }

    /// Variant shown while the selection is incomplete: first in stock, else first.
    pub fn fallback_variant(&self) -> Option<&'a Variant> {
        self.candidates()
            .find(|v| v.is_in_stock())
            .or_else(|| self.candidates().next())
    }

    /// Price, stock, and image to show for an optional matched variant.
    pub fn effective_display(&self, matched: Option<&Variant>) -> DisplayRecord {
        if let Some(variant) = matched {
            return DisplayRecord::from_variant(self.product, variant, DisplaySource::Matched);
        }
        match self.fallback_variant() {
            Some(variant) => {
                DisplayRecord::from_variant(self.product, variant, DisplaySource::Fallback)
            }
            None => DisplayRecord::from_product(self.product),
        }
    }

    /// Apply an option click under `policy`.
    ///
    /// With [`SelectionPolicy::ClearIncompatible`], every other chosen value
    /// that is no longer available is dropped. Both policies are idempotent.
    pub fn apply_option_change(
        &self,
        selection: &Selection,
        option_name: &str,
        value: &str,
        policy: SelectionPolicy,
    ) -> Selection {
        let mut next = handle_option_change(option_name, value, selection);
        if policy == SelectionPolicy::KeepAndDim {
            return next;
        }

        for option in &self.product.options {
            if option.name == option_name {
                continue;
            }
            let Some(chosen) = next.get(&option.name) else {
                continue;
            };
            if !self.is_value_available(&option.name, chosen, &next) {
                tracing::debug!(
                    product = %self.product.id,
                    option = %option.name,
                    "clearing choice made unavailable by {}={}",
                    option_name,
                    value
                );
                next.remove(&option.name);
            }
        }
        next
    }

    /// Rows of controls for every option, listing only available values.
    pub fn option_rows(&self, selection: &Selection) -> Vec<OptionRow> {
        self.product
            .options
            .iter()
            .map(|option| OptionRow {
                name: option.name.clone(),
                has_swatch: option.has_swatch(),
                controls: self
                    .available_values(&option.name, selection)
                    .into_iter()
                    .map(|value| OptionControl::new(option, value, selection, self.swatches))
                    .collect(),
            })
            .collect()
    }
}
