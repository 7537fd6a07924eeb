//! Commerce error types.

use thiserror::Error;

use crate::catalog::ProductId;

/// Errors raised while building catalogs, query parameters or actions.
///
/// Cart and query operations never return these; they are total and keep
/// the prior state on invalid input.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Two catalog products share an id.
    #[error("Duplicate product id: {0}")]
    DuplicateProductId(ProductId),

    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    UnknownProduct(ProductId),

    /// Category name does not match any category.
    #[error("Unknown category: {0:?}")]
    UnknownCategory(String),

    /// Sort mode string not recognized.
    #[error("Invalid sort mode: {0:?}")]
    InvalidSortMode(String),

    /// Store action could not be parsed.
    #[error("Invalid action {input:?}: {reason}")]
    InvalidAction { input: String, reason: String },

    /// Deserialized cart entry breaks the ledger invariants.
    #[error("Invalid cart entry for product {id}: {reason}")]
    InvalidCartEntry { id: ProductId, reason: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

/// Why a cart operation left the ledger unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartRejection {
    /// Product has no stock at all.
    #[error("Product {0} is out of stock")]
    OutOfStock(ProductId),

    /// Cart already holds every unit in stock.
    #[error("Product {id} already at stock limit ({stock})")]
    StockLimitReached { id: ProductId, stock: u32 },

    /// Requested quantity is outside `[1, stock]`, where `stock` is the
    /// effective bound (the caller's stock capped by the entry snapshot).
    #[error("Quantity {requested} for product {id} is outside 1..={stock}")]
    QuantityOutOfRange {
        id: ProductId,
        requested: i64,
        stock: u32,
    },

    /// No entry for this product.
    #[error("Item not in cart: {0}")]
    NotInCart(ProductId),

    /// Product id is not in the catalog.
    #[error("Product not found: {0}")]
    NotInCatalog(ProductId),
}
