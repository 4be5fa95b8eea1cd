//! Shared color-name to color-value lookup.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Immutable table of swatch colors keyed by option value (e.g., "Navy" -> "#1e3a8a").
///
/// Consulted for swatch-capable options whose own `swatches` map has no
/// entry for a value. Lookups ignore ASCII case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SwatchTable(BTreeMap<String, String>);

impl SwatchTable {
    pub const fn empty() -> Self {
        Self(BTreeMap::new())
    }

    pub fn new(entries: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(name, color)| (name.into(), color.into()))
                .collect(),
        )
    }

    /// Color for a value name.
    pub fn get(&self, value: &str) -> Option<&str> {
        self.0
            .get(value)
            .or_else(|| {
                self.0
                    .iter()
                    .find(|(name, _)| name.eq_ignore_ascii_case(value))
                    .map(|(_, color)| color)
            })
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

pub(crate) static EMPTY_SWATCHES: SwatchTable = SwatchTable::empty();
