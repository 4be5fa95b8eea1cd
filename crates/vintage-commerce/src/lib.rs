//! Storefront core for a vintage fashion shop.
//!
//! This crate holds the logic behind the storefront's presentation layer:
//!
//! - **Catalog**: Products, options, variants, collections, integrity checks
//! - **Variant**: Option availability, variant matching, card display state
//! - **Storefront**: Collection browsing and product card view models
//! - **Cart**: Line items fed by the card's "Add to Cart" button
//!
//! # Example
//!
//! ```rust,ignore
//! use vintage_commerce::prelude::*;
//!
//! let snapshot = source.load_snapshot().await?;
//! let index = CatalogIndex::new(snapshot);
//!
//! let product = index.find_product("suede-jacket").unwrap();
//! let mut card = ProductCard::new(product);
//! card.select("Color", "Tan");
//! card.select("Size", "M");
//!
//! let mut cart = Cart::new(Currency::USD);
//! if card.can_add_to_cart() {
//!     card.add_to_cart(&mut cart, 1)?;
//! }
//! println!("{}", card.display().format_price());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod storefront;
pub mod variant;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        check_product, CatalogSnapshot, CatalogSource, Collection, IntegrityFault, Product,
        ProductOption, StaticCatalog, Variant,
    };

    // Variant selection
    pub use crate::variant::{
        handle_option_change, ControlState, ControlStyle, DisplayRecord, DisplaySource,
        OptionControl, OptionRow, Selection, SelectionPolicy, SwatchTable, VariantResolver,
    };

    // Storefront
    pub use crate::storefront::{Badge, CatalogIndex, ProductCard};

    // Cart
    pub use crate::cart::{Cart, LineItem, NewLineItem};
}
