//! Data integrity checks for catalog records.
//!
//! Faults are values, not errors. The storefront keeps rendering a product
//! with bad data; it just refuses to match the affected variants.

use crate::catalog::{Product, Variant};
use crate::ids::VariantId;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// A data-integrity problem found on a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntegrityFault {
    /// Options are declared but there is nothing to buy.
    NoVariants,
    /// An option lists the same value twice.
    DuplicateOptionValue { option: String, value: String },
    /// Variant lacks a value for a declared option.
    MissingOption { variant: VariantId, option: String },
    /// Variant names an option the product does not declare.
    UndeclaredOption { variant: VariantId, option: String },
    /// Variant uses a value not listed in the option's values.
    UndeclaredValue {
        variant: VariantId,
        option: String,
        value: String,
    },
    /// Two variants share an option combination; the first one wins.
    DuplicateCombination { first: VariantId, duplicate: VariantId },
    /// Negative price; displayed as zero.
    NegativePrice { variant: Option<VariantId> },
}

impl IntegrityFault {
    /// The variant this fault makes non-matchable, if any.
    pub fn disqualifies_variant(&self) -> Option<&VariantId> {
        match self {
            IntegrityFault::MissingOption { variant, .. }
            | IntegrityFault::UndeclaredOption { variant, .. }
            | IntegrityFault::UndeclaredValue { variant, .. } => Some(variant),
            _ => None,
        }
    }
}

impl fmt::Display for IntegrityFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityFault::NoVariants => write!(f, "options declared but no variants"),
            IntegrityFault::DuplicateOptionValue { option, value } => {
                write!(f, "option {} lists value {} more than once", option, value)
            }
            IntegrityFault::MissingOption { variant, option } => {
                write!(f, "variant {} has no value for option {}", variant, option)
            }
            IntegrityFault::UndeclaredOption { variant, option } => {
                write!(f, "variant {} references undeclared option {}", variant, option)
            }
            IntegrityFault::UndeclaredValue {
                variant,
                option,
                value,
            } => write!(
                f,
                "variant {} uses value {} not declared on option {}",
                variant, value, option
            ),
            IntegrityFault::DuplicateCombination { first, duplicate } => write!(
                f,
                "variant {} repeats the option combination of {}",
                duplicate, first
            ),
            IntegrityFault::NegativePrice { variant: Some(v) } => {
                write!(f, "variant {} has a negative price", v)
            }
            IntegrityFault::NegativePrice { variant: None } => {
                write!(f, "product has a negative price")
            }
        }
    }
}

/// Whether `variant` names exactly the product's options, each with a declared value.
///
/// Judged per variant, so a bad variant never taints another that shares its ID.
pub fn is_well_formed(product: &Product, variant: &Variant) -> bool {
    product.options.iter().all(|o| {
        variant
            .value_of(&o.name)
            .is_some_and(|value| o.declares(value))
    }) && variant.options.keys().all(|name| product.option(name).is_some())
}

/// Check a product for integrity faults, in declared order.
pub fn check_product(product: &Product) -> Vec<IntegrityFault> {
    let mut faults = Vec::new();

    if product.price.is_negative() {
        faults.push(IntegrityFault::NegativePrice { variant: None });
    }

    if product.has_options() && product.variants.is_empty() {
        faults.push(IntegrityFault::NoVariants);
    }

    for option in &product.options {
        let mut seen = HashSet::new();
        for value in &option.values {
            if !seen.insert(value.as_str()) {
                faults.push(IntegrityFault::DuplicateOptionValue {
                    option: option.name.clone(),
                    value: value.clone(),
                });
            }
        }
    }

    // Combination key -> first variant carrying it, well-formed variants only.
    let mut combinations: Vec<(Vec<&str>, &VariantId)> = Vec::new();

    for variant in &product.variants {
        if variant.price.is_negative() {
            faults.push(IntegrityFault::NegativePrice {
                variant: Some(variant.id.clone()),
            });
        }

        for option in &product.options {
            match variant.value_of(&option.name) {
                None => faults.push(IntegrityFault::MissingOption {
                    variant: variant.id.clone(),
                    option: option.name.clone(),
                }),
                Some(value) if !option.declares(value) => {
                    faults.push(IntegrityFault::UndeclaredValue {
                        variant: variant.id.clone(),
                        option: option.name.clone(),
                        value: value.to_string(),
                    })
                }
                Some(_) => {}
            }
        }

        for name in variant.options.keys() {
            if product.option(name).is_none() {
                faults.push(IntegrityFault::UndeclaredOption {
                    variant: variant.id.clone(),
                    option: name.clone(),
                });
            }
        }

        if !is_well_formed(product, variant) || !product.has_options() {
            continue;
        }

        let key: Vec<&str> = product
            .options
            .iter()
            .filter_map(|o| variant.value_of(&o.name))
            .collect();
        match combinations.iter().find(|(k, _)| *k == key) {
            Some((_, first)) => faults.push(IntegrityFault::DuplicateCombination {
                first: (*first).clone(),
                duplicate: variant.id.clone(),
            }),
            None => combinations.push((key, &variant.id)),
        }
    }

    faults
}
