//! Product catalog module.
//!
//! Contains types for products, categories, and the static catalog.

mod catalog;
mod category;
mod product;

pub use catalog::Catalog;
pub use category::Category;
pub use product::{Product, ProductId, StockStatus};
