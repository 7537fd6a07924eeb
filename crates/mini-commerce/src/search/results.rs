//! Query results.

use serde::{Deserialize, Serialize};

use crate::catalog::{Product, ProductId};

/// Products a query produced, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Listing {
    /// The matching products.
    pub products: Vec<Product>,
}

impl Listing {
    /// Message shown in place of an empty listing.
    pub const EMPTY_MESSAGE: &'static str = "No products found";

    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Number of products listed.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Product ids in display order.
    pub fn ids(&self) -> Vec<ProductId> {
        self.products.iter().map(|p| p.id).collect()
    }

    pub fn into_inner(self) -> Vec<Product> {
        self.products
    }
}

impl<'a> IntoIterator for &'a Listing {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
