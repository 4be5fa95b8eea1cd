//! Product grid listing.

use anyhow::Result;
use serde::Serialize;

use super::ProductsArgs;
use crate::catalog;
use crate::context::Context;
use crate::output::badge;
use vintage_commerce::storefront::{Badge, CatalogIndex, ProductCard};
use vintage_commerce::CollectionId;

#[derive(Serialize)]
struct ProductSummary {
    slug: String,
    title: String,
    price: String,
    compare_at: Option<String>,
    badges: Vec<Badge>,
    cart_label: &'static str,
}

#[derive(Serialize)]
struct Grid {
    heading: String,
    products: Vec<ProductSummary>,
}

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let snapshot = catalog::load(&ctx.catalog_path()).await?;
    let mut index = CatalogIndex::new(snapshot);

    if let Some(id) = args.collection {
        index.try_view_collection(CollectionId::new(id))?;
    }

    let swatches = &ctx.config.swatches;
    let policy = ctx.config.storefront.selection_policy;
    let products: Vec<ProductSummary> = index
        .filtered_products()
        .into_iter()
        .map(|product| {
            let card = ProductCard::with_swatches(product, swatches, policy);
            let display = card.display();
            ProductSummary {
                slug: product.slug.clone(),
                title: product.title.clone(),
                price: display.format_price(),
                compare_at: display.format_compare_at(),
                badges: card.badges(),
                cart_label: card.cart_label(),
            }
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&Grid {
            heading: index.heading().to_string(),
            products,
        });
        return Ok(());
    }

    ctx.output.header(index.heading());
    if let Some(message) = index.empty_message() {
        ctx.output.info(message);
        return Ok(());
    }

    for product in &products {
        let price = match &product.compare_at {
            Some(compare_at) => format!("{} (was {})", product.price, compare_at),
            None => product.price.clone(),
        };
        let badges: Vec<String> = product.badges.iter().map(badge).collect();
        let badges = badges.join(" ");
        ctx.output.table_row(
            &[
                product.slug.as_str(),
                product.title.as_str(),
                price.as_str(),
                badges.as_str(),
            ],
            &[20, 24, 22, 0],
        );
    }

    Ok(())
}
