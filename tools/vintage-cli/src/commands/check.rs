//! Catalog integrity report.

use anyhow::{anyhow, bail, Result};
use serde::Serialize;

use super::CheckArgs;
use crate::catalog;
use crate::context::Context;
use vintage_commerce::catalog::{check_product, IntegrityFault, Product};

#[derive(Serialize)]
struct ProductReport<'a> {
    slug: &'a str,
    faults: Vec<IntegrityFault>,
}

/// Run the check command.
pub async fn run(args: CheckArgs, ctx: &Context) -> Result<()> {
    let snapshot = catalog::load(&ctx.catalog_path()).await?;

    let products: Vec<&Product> = match &args.slug {
        Some(slug) => vec![snapshot
            .products
            .iter()
            .find(|p| &p.slug == slug)
            .ok_or_else(|| anyhow!("Product not found: {}", slug))?],
        None => snapshot.products.iter().collect(),
    };

    let reports: Vec<ProductReport> = products
        .iter()
        .map(|p| ProductReport {
            slug: &p.slug,
            faults: check_product(p),
        })
        .collect();
    let total: usize = reports.iter().map(|r| r.faults.len()).sum();

    if ctx.output.is_json() {
        ctx.output.json(&reports);
    } else {
        ctx.output.header("Catalog integrity");
        for report in &reports {
            if report.faults.is_empty() {
                ctx.output.debug(&format!("{}: ok", report.slug));
                continue;
            }
            ctx.output.warn(&format!(
                "{}: {} fault(s)",
                report.slug,
                report.faults.len()
            ));
            for fault in &report.faults {
                ctx.output.list_item(&fault.to_string());
            }
        }
    }

    if total > 0 {
        bail!(
            "{} integrity fault(s) across {} product(s)",
            total,
            reports.iter().filter(|r| !r.faults.is_empty()).count()
        );
    }

    ctx.output
        .success(&format!("{} product(s) checked, no faults", reports.len()));

    Ok(())
}
