//! CLI command implementations.

pub mod card;
pub mod check;
pub mod collections;
pub mod config;
pub mod products;

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

/// Arguments for the collections command.
#[derive(Args)]
pub struct CollectionsArgs {
    /// Only list featured collections.
    #[arg(long)]
    pub featured: bool,
}

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Collection ID to filter by.
    #[arg(long)]
    pub collection: Option<String>,
}

/// Arguments for the card command.
#[derive(Args)]
pub struct CardArgs {
    /// Product slug.
    pub slug: String,

    /// Option choice as Name=Value, applied in order (repeatable).
    #[arg(short, long = "select", value_parser = parse_choice)]
    pub select: Vec<(String, String)>,

    /// Override the configured selection policy (keep-and-dim, clear-incompatible).
    #[arg(long)]
    pub policy: Option<String>,

    /// Add the resolved variant to a cart with this quantity.
    #[arg(long)]
    pub add: Option<i64>,
}

/// Arguments for the check command.
#[derive(Args)]
pub struct CheckArgs {
    /// Only check this product.
    #[arg(long)]
    pub slug: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file and catalog path.
    Validate,
}

/// Parse `Name=Value`.
fn parse_choice(s: &str) -> Result<(String, String)> {
    let Some((name, value)) = s.split_once('=') else {
        bail!("expected Name=Value, got '{}'", s);
    };
    let (name, value) = (name.trim(), value.trim());
    if name.is_empty() || value.is_empty() {
        bail!("expected Name=Value, got '{}'", s);
    }
    Ok((name.to_string(), value.to_string()))
}
