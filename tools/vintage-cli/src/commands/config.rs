//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use tracing_subscriber::EnvFilter;

use super::{ConfigArgs, ConfigCommand};
use crate::catalog;
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let storefront = &ctx.config.storefront;
    ctx.output.info("[storefront]");
    ctx.output.kv("catalog", &storefront.catalog);
    ctx.output
        .kv("catalog (resolved)", &ctx.catalog_path().display().to_string());
    ctx.output.kv("currency", storefront.currency.code());
    ctx.output
        .kv("selection_policy", storefront.selection_policy.as_str());

    if !ctx.config.swatches.is_empty() {
        ctx.output.info("[swatches]");
        for (value, color) in ctx.config.swatches.iter() {
            ctx.output.kv(value, color);
        }
    }

    ctx.output.info("[log]");
    ctx.output.kv("level", &ctx.config.log.level);

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("vintage.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    let catalog_path = ctx.catalog_path();
    if !catalog_path.exists() {
        errors.push(format!(
            "storefront.catalog not found: {}",
            catalog_path.display()
        ));
    } else if let Err(e) = catalog::load(&catalog_path).await {
        errors.push(format!("storefront.catalog is not a valid snapshot: {:#}", e));
    }

    for (value, color) in ctx.config.swatches.iter() {
        if !looks_like_color(color) {
            warnings.push(format!("swatches.{} = '{}' is not a hex color", value, color));
        }
    }

    if let Err(e) = EnvFilter::try_new(&ctx.config.log.level) {
        errors.push(format!("log.level '{}' is invalid: {}", ctx.config.log.level, e));
    }

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

/// `#rgb` or `#rrggbb`.
fn looks_like_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looks_like_color() {
        assert!(looks_like_color("#b91c1c"));
        assert!(looks_like_color("#FFF"));
        assert!(!looks_like_color("red"));
        assert!(!looks_like_color("#12345"));
        assert!(!looks_like_color("#zzzzzz"));
    }
}
