// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Button, Loading, ErrorDisplay, ...)
// - product.rs: Product display components (StockBadge, ProductList)
// - form.rs: The create/update product form

pub mod common;
pub mod form;
pub mod product;

// Re-export commonly used components for convenience
pub use common::*;
pub use form::*;
pub use product::*;
