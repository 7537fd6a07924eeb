//! Product types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::Category;

/// Numeric product identifier, unique within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Create an ID from its numeric value.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the numeric value.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Availability shown next to a product in a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    OutOfStock,
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A product in the catalog.
///
/// Products are defined once when the catalog is built and never change
/// afterwards. Cart entries hold their own snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title, the only field text search looks at.
    pub title: String,
    /// Price in the smallest currency unit.
    pub price: u64,
    /// Category the product is listed under.
    pub category: Category,
    /// Units available for the session.
    pub stock: u32,
}

impl Product {
    /// Create a new product.
    pub fn new(
        id: u32,
        title: impl Into<String>,
        price: u64,
        category: Category,
        stock: u32,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            title: title.into(),
            price,
            category,
            stock,
        }
    }

    /// Whether any unit can be put in a cart.
    pub fn can_add(&self) -> bool {
        self.stock > 0
    }

    pub fn stock_status(&self) -> StockStatus {
        if self.can_add() {
            StockStatus::InStock
        } else {
            StockStatus::OutOfStock
        }
    }

    /// Case-insensitive substring match on the title.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn title_contains(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
    }
}
