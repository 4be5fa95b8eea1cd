//! Vintage CLI - browse and check a vintage storefront catalog from the terminal.
//!
//! Commands:
//! - `vintage collections` - List collections
//! - `vintage products` - Product grid, optionally for one collection
//! - `vintage card` - One product card with option choices applied
//! - `vintage check` - Catalog integrity report
//! - `vintage config` - Manage configuration

mod catalog;
mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CardArgs, CheckArgs, CollectionsArgs, ConfigArgs, ProductsArgs};

/// Vintage CLI - Browse a storefront catalog and resolve product variants
#[derive(Parser)]
#[command(name = "vintage")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Catalog snapshot path (overrides storefront.catalog)
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List collections
    Collections(CollectionsArgs),

    /// Show the product grid
    Products(ProductsArgs),

    /// Show one product card and apply option choices
    Card(CardArgs),

    /// Report catalog integrity faults
    Check(CheckArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, cli.catalog, output)?;

    init_tracing(cli.verbose, &ctx.config.log.level);

    // Execute command
    let result = match cli.command {
        Commands::Collections(args) => commands::collections::run(args, &ctx).await,
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Card(args) => commands::card::run(args, &ctx).await,
        Commands::Check(args) => commands::check::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// RUST_LOG wins, then `--verbose`, then `log.level` from the config.
fn init_tracing(verbose: bool, level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = if verbose { "debug" } else { level };
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_products_collection_with_global_config() {
        let cli = Cli::try_parse_from([
            "vintage",
            "-c",
            "demos/vintage.toml",
            "products",
            "--collection",
            "col-70s-denim",
        ])
        .unwrap();
        assert_eq!(cli.config.as_deref(), Some("demos/vintage.toml"));
        match cli.command {
            Commands::Products(args) => {
                assert_eq!(args.collection.as_deref(), Some("col-70s-denim"))
            }
            _ => panic!("expected products"),
        }
    }

    #[test]
    fn test_card_choices_keep_order() {
        let cli = Cli::try_parse_from([
            "vintage",
            "card",
            "trucker-jacket",
            "-s",
            "Wash=Stone",
            "--select",
            "Size=M",
            "--add",
            "2",
            "--json",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Card(args) => {
                assert_eq!(
                    args.select,
                    vec![
                        ("Wash".to_string(), "Stone".to_string()),
                        ("Size".to_string(), "M".to_string()),
                    ]
                );
                assert_eq!(args.add, Some(2));
            }
            _ => panic!("expected card"),
        }
    }

    #[test]
    fn test_bad_choice_is_rejected() {
        assert!(Cli::try_parse_from(["vintage", "card", "jacket", "-s", "Color"]).is_err());
    }
}
