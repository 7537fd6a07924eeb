//! Catalog query and cart state engine for the Mini Commerce storefront.
//!
//! This crate holds everything a storefront view needs to derive its state:
//!
//! - **Catalog**: Products, categories, the built-in catalog
//! - **Search**: Text/category filtering, price sorting, memoized listings
//! - **Cart**: Stock-bounded cart ledger and totals
//! - **Store**: A single state container with a reducer and undo/redo
//!
//! Every operation is a pure function of its inputs. Invalid input (adding an
//! out-of-stock product, setting a quantity beyond stock) leaves the state as
//! it was instead of failing.
//!
//! # Example
//!
//! ```rust
//! use mini_commerce::prelude::*;
//!
//! let catalog = Catalog::builtin();
//! let params = QueryParams::new().with_search("sh");
//! let listing = catalog.query(&params);
//! assert_eq!(listing.len(), 1);
//!
//! let laptop = catalog.get(ProductId::new(1)).unwrap();
//! let cart = CartLedger::new().add_to_cart(laptop).add_to_cart(laptop);
//! assert_eq!(cart.totals().total_items, 2);
//! assert_eq!(cart.totals().total_price, 100_000);
//! ```

pub mod error;

pub mod cart;
pub mod catalog;
pub mod search;
pub mod store;

pub use error::{CartRejection, CommerceError};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CartRejection, CommerceError};

    // Catalog
    pub use crate::catalog::{Catalog, Category, Product, ProductId, StockStatus};

    // Search
    pub use crate::search::{query, CategoryFilter, Listing, QueryMemo, QueryParams, SortMode};

    // Cart
    pub use crate::cart::{CartEntry, CartLedger, CartTotals};

    // Store
    pub use crate::store::{Action, History, StoreState};
}
