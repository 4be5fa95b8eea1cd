//! Storefront view models.
//!
//! Index page browsing state and the product card the grid renders.

mod card;
mod listing;
mod text;

pub use card::{Badge, ProductCard};
pub use listing::{CatalogIndex, ALL_PRODUCTS_HEADING, UNKNOWN_COLLECTION_HEADING};
pub use text::strip_html;
