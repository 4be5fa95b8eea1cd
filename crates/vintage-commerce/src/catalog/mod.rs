//! Product catalog module.
//!
//! Contains types for products, options, variants, collections, integrity
//! checks, and the catalog data seam.

mod collection;
mod integrity;
mod product;
mod source;

pub use collection::Collection;
pub use integrity::{check_product, is_well_formed, IntegrityFault};
pub use product::{Product, ProductOption, Variant};
pub use source::{CatalogSnapshot, CatalogSource, StaticCatalog};
