//! Variant selection for product cards.
//!
//! [`VariantResolver`] answers three questions for a product and a partial
//! [`Selection`]: which option values can still be picked, which variant a
//! complete selection names, and what price/stock/image the card shows.

mod controls;
mod display;
mod resolver;
mod selection;
mod swatch;

pub use controls::{ControlState, ControlStyle, OptionControl, OptionRow};
pub use display::{discount_percentage, DisplayRecord, DisplaySource};
pub use resolver::VariantResolver;
pub use selection::{handle_option_change, Selection, SelectionPolicy};
pub use swatch::SwatchTable;
