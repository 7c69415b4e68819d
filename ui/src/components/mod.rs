//! Shared components of the catalog: the theme and language controls, the
//! category navigation and the product grid.
pub mod categories;
pub mod dark_mode_selector;
pub mod empty_state;
pub mod language_selector;
pub mod pico;
pub mod product_preview;
pub mod products;
