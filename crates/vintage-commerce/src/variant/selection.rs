//! In-progress option selection for one product card.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Option name to chosen value. May be partial.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(BTreeMap<String, String>);

impl Selection {
    /// An empty selection, as on card mount.
    pub fn new() -> Self {
        Self::default()
    }

    /// Chosen value for an option.
    pub fn get(&self, option_name: &str) -> Option<&str> {
        self.0.get(option_name).map(String::as_str)
    }

    /// Whether `value` is the chosen value for `option_name`.
    pub fn is_chosen(&self, option_name: &str, value: &str) -> bool {
        self.get(option_name) == Some(value)
    }

    pub fn set(&mut self, option_name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(option_name.into(), value.into());
    }

    pub fn remove(&mut self, option_name: &str) -> Option<String> {
        self.0.remove(option_name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// A selection is complete when every product option has a chosen value.
    ///
    /// Entries for options the product does not declare are ignored.
    pub fn is_complete(&self, product: &Product) -> bool {
        product.options.iter().all(|o| self.0.contains_key(&o.name))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Selection {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Record a user click on an option value.
///
/// Other options keep their chosen values even if the new choice makes them
/// unavailable; they render dimmed. See
/// [`VariantResolver::apply_option_change`](crate::variant::VariantResolver::apply_option_change)
/// for the clearing policy.
pub fn handle_option_change(option_name: &str, value: &str, selection: &Selection) -> Selection {
    let mut next = selection.clone();
    next.set(option_name, value);
    next
}

/// What to do with other chosen values that a new choice makes unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionPolicy {
    /// Leave them selected; the card renders them dimmed.
    #[default]
    KeepAndDim,
    /// Drop them so the shopper re-picks.
    ClearIncompatible,
}

impl SelectionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionPolicy::KeepAndDim => "keep-and-dim",
            SelectionPolicy::ClearIncompatible => "clear-incompatible",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "keep-and-dim" | "keep" => Some(SelectionPolicy::KeepAndDim),
            "clear-incompatible" | "clear" => Some(SelectionPolicy::ClearIncompatible),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductOption;
    use crate::money::{Currency, Money};

    #[test]
    fn test_handle_option_change_sets_value() {
        let selection = Selection::new();
        let next = handle_option_change("Color", "Red", &selection);
        assert_eq!(next.get("Color"), Some("Red"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_handle_option_change_is_idempotent() {
        let start: Selection = [("Size", "M")].into_iter().collect();
        let once = handle_option_change("Color", "Blue", &start);
        let twice = handle_option_change("Color", "Blue", &once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_handle_option_change_keeps_other_choices() {
        let start: Selection = [("Color", "Red"), ("Size", "S")].into_iter().collect();
        let next = handle_option_change("Color", "Blue", &start);
        assert_eq!(next.get("Size"), Some("S"));
        assert!(next.is_chosen("Color", "Blue"));
    }

    #[test]
    fn test_completeness() {
        let mut product = Product::new("p-1", "Jacket", "jacket", Money::new(100, Currency::USD));
        product.options = vec![
            ProductOption::new("Color", ["Red"]),
            ProductOption::new("Size", ["M"]),
        ];

        let partial: Selection = [("Color", "Red"), ("Fit", "Slim")].into_iter().collect();
        assert!(!partial.is_complete(&product));

        let complete = handle_option_change("Size", "M", &partial);
        assert!(complete.is_complete(&product));

        product.options.clear();
        assert!(Selection::new().is_complete(&product));
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!(SelectionPolicy::from_str("clear"), Some(SelectionPolicy::ClearIncompatible));
        assert_eq!(SelectionPolicy::from_str("Keep-And-Dim"), Some(SelectionPolicy::KeepAndDim));
        assert_eq!(SelectionPolicy::from_str("reset"), None);
        assert_eq!(SelectionPolicy::default().as_str(), "keep-and-dim");
    }
}
