//! Collection listing.

use anyhow::Result;
use serde::Serialize;

use super::CollectionsArgs;
use crate::catalog;
use crate::context::Context;
use vintage_commerce::storefront::CatalogIndex;

#[derive(Serialize)]
struct CollectionInfo<'a> {
    id: &'a str,
    name: &'a str,
    featured: bool,
    products: usize,
    description: Option<&'a str>,
}

/// Run the collections command.
pub async fn run(args: CollectionsArgs, ctx: &Context) -> Result<()> {
    let snapshot = catalog::load(&ctx.catalog_path()).await?;
    let mut index = CatalogIndex::new(snapshot);

    let collections: Vec<_> = index
        .collections()
        .iter()
        .filter(|c| !args.featured || c.featured)
        .cloned()
        .collect();

    let mut rows = Vec::with_capacity(collections.len());
    for collection in &collections {
        index.view_collection(collection.id.clone());
        rows.push(CollectionInfo {
            id: collection.id.as_str(),
            name: &collection.name,
            featured: collection.featured,
            products: index.filtered_products().len(),
            description: collection.description.as_deref(),
        });
    }

    if ctx.output.is_json() {
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header("Collections");
    if rows.is_empty() {
        ctx.output.info("No collections found.");
        return Ok(());
    }

    for row in &rows {
        let featured = if row.featured { "Featured" } else { "" };
        let count = format!("{} products", row.products);
        ctx.output
            .table_row(&[row.id, row.name, count.as_str(), featured], &[20, 24, 12, 8]);
        if let Some(description) = row.description {
            ctx.output.debug(description);
        }
    }

    Ok(())
}
