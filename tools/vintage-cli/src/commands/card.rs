//! Single product card: option clicks, resolved display, optional add-to-cart.

use anyhow::{anyhow, Result};
use serde::Serialize;

use super::CardArgs;
use crate::catalog;
use crate::context::Context;
use crate::output::{badge, control};
use vintage_commerce::cart::{Cart, LineItem};
use vintage_commerce::storefront::{Badge, CatalogIndex, ProductCard};
use vintage_commerce::variant::{DisplayRecord, OptionRow, Selection, SelectionPolicy};
use vintage_commerce::Money;

#[derive(Serialize)]
struct CardReport<'a> {
    slug: &'a str,
    title: &'a str,
    href: String,
    policy: SelectionPolicy,
    selection: &'a Selection,
    options: Vec<OptionRow>,
    matched_variant: Option<&'a str>,
    display: DisplayRecord,
    badges: Vec<Badge>,
    cart_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    cart: Option<CartReport<'a>>,
}

#[derive(Serialize)]
struct CartReport<'a> {
    items: &'a [LineItem],
    subtotal: Money,
}

/// Run the card command.
pub async fn run(args: CardArgs, ctx: &Context) -> Result<()> {
    let policy = match args.policy.as_deref() {
        Some(name) => SelectionPolicy::from_str(name).ok_or_else(|| {
            anyhow!(
                "Unknown selection policy '{}' (expected keep-and-dim or clear-incompatible)",
                name
            )
        })?,
        None => ctx.config.storefront.selection_policy,
    };

    let snapshot = catalog::load(&ctx.catalog_path()).await?;
    let index = CatalogIndex::new(snapshot);
    let product = index.try_find_product(&args.slug)?;

    let mut card = ProductCard::with_swatches(product, &ctx.config.swatches, policy);
    for fault in card.resolver().faults() {
        ctx.output.warn(&fault.to_string());
    }

    for (name, value) in &args.select {
        if !card.resolver().is_value_available(name, value, card.selection()) {
            ctx.output
                .warn(&format!("{}: {} is not available with the current selection", name, value));
        }
        card.select(name, value);
        ctx.output.debug(&format!("selected {}={}", name, value));
    }

    let mut cart = None;
    if let Some(quantity) = args.add {
        let mut c = Cart::new(ctx.config.storefront.currency);
        card.add_to_cart(&mut c, quantity)?;
        cart = Some(c);
    }
    let cart_report = match &cart {
        Some(c) => Some(CartReport {
            items: &c.items,
            subtotal: c.subtotal()?,
        }),
        None => None,
    };

    let matched = card.matched_variant();
    let report = CardReport {
        slug: &product.slug,
        title: &product.title,
        href: card.href(),
        policy,
        selection: card.selection(),
        options: card.option_rows(),
        matched_variant: matched.map(|v| v.id.as_str()),
        display: card.display(),
        badges: card.badges(),
        cart_label: card.cart_label(),
        cart: cart_report,
    };

    if ctx.output.is_json() {
        ctx.output.json(&report);
        return Ok(());
    }

    ctx.output.header(report.title);
    ctx.output.kv("Link", &report.href);
    if let Some(description) = card.plain_description() {
        ctx.output.kv("About", &description);
    }

    for row in &report.options {
        let controls: Vec<String> = row.controls.iter().map(control).collect();
        let controls = if controls.is_empty() {
            "(none available)".to_string()
        } else {
            controls.join(" ")
        };
        ctx.output.kv(&row.name, &controls);
    }

    let display = &report.display;
    let variant = match matched {
        Some(v) => format!("{} ({})", v.title(product), v.id),
        None if product.has_options() => "choose all options".to_string(),
        None => "n/a".to_string(),
    };
    ctx.output.kv("Variant", &variant);

    let price = match display.format_compare_at() {
        Some(compare_at) => format!("{} (was {})", display.format_price(), compare_at),
        None => display.format_price(),
    };
    ctx.output.kv("Price", &price);
    if let Some(image) = &display.image {
        ctx.output.kv("Image", image);
    }
    if !report.badges.is_empty() {
        let badges: Vec<String> = report.badges.iter().map(badge).collect();
        ctx.output.kv("Badges", &badges.join(" "));
    }
    ctx.output.kv("Button", report.cart_label);

    if let Some(cart) = &report.cart {
        for item in cart.items {
            let title = match &item.variant_title {
                Some(variant) => format!("{} ({})", item.product_title, variant),
                None => item.product_title.clone(),
            };
            ctx.output.success(&format!(
                "Added {} x {} at {}",
                item.quantity,
                title,
                item.unit_price.display()
            ));
        }
        ctx.output.kv("Subtotal", &cart.subtotal.display());
    }

    Ok(())
}
