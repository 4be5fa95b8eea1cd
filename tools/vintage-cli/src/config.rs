//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use vintage_commerce::variant::{SelectionPolicy, SwatchTable};
use vintage_commerce::Currency;

/// Config file names searched for, in order, walking up from the cwd.
pub const CONFIG_NAMES: [&str; 3] = ["vintage.toml", ".vintage.toml", "vintage.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Storefront settings.
    #[serde(default)]
    pub storefront: StorefrontConfig,

    /// Shared swatch colors, keyed by option value.
    #[serde(default)]
    pub swatches: SwatchTable,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Storefront settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Path to the catalog snapshot (JSON), relative to the working directory.
    #[serde(default = "default_catalog")]
    pub catalog: String,

    /// Cart currency.
    #[serde(default)]
    pub currency: Currency,

    /// What to do with choices a new option click makes unavailable.
    #[serde(default)]
    pub selection_policy: SelectionPolicy,
}

fn default_catalog() -> String {
    "catalog.json".to_string()
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            currency: Currency::default(),
            selection_policy: SelectionPolicy::default(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default filter directive when RUST_LOG is unset (e.g., "info", "vintage_commerce=debug").
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

/// Generate a default vintage.toml config file.
pub fn generate_default_config() -> String {
    r##"# Vintage storefront configuration

[storefront]
catalog = "catalog.json"
currency = "USD"
# keep-and-dim | clear-incompatible
selection_policy = "keep-and-dim"

# Fallback swatch colors for swatch-capable options.
[swatches]
Black = "#111827"
Cream = "#fef3c7"
Camel = "#c19a6b"
Navy = "#1e3a8a"
Burgundy = "#7f1d1d"

[log]
# Overridden by RUST_LOG.
level = "warn"
"##
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.storefront.catalog, "catalog.json");
        assert_eq!(config.storefront.selection_policy, SelectionPolicy::KeepAndDim);
        assert_eq!(config.swatches.get("navy"), Some("#1e3a8a"));
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config.storefront.currency, Currency::USD);
        assert!(config.swatches.is_empty());
    }

    #[test]
    fn test_policy_and_currency_from_toml() {
        let config: CliConfig = toml::from_str(
            "[storefront]\ncurrency = \"EUR\"\nselection_policy = \"clear-incompatible\"\n",
        )
        .unwrap();
        assert_eq!(config.storefront.currency, Currency::EUR);
        assert_eq!(
            config.storefront.selection_policy,
            SelectionPolicy::ClearIncompatible
        );
    }
}
