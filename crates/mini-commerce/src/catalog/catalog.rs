//! The static product catalog.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Product, ProductId};
use crate::error::CommerceError;
use crate::search::{query, Listing, QueryParams};

/// An ordered, immutable list of products with unique ids.
///
/// The order products are given in is the order listings show when no sort
/// is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogDocument", into = "CatalogDocument")]
pub struct Catalog {
    products: Vec<Product>,
}

/// On-disk shape of a catalog: `{ "products": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogDocument {
    products: Vec<Product>,
}

impl TryFrom<CatalogDocument> for Catalog {
    type Error = CommerceError;

    fn try_from(doc: CatalogDocument) -> Result<Self, Self::Error> {
        Catalog::new(doc.products)
    }
}

impl From<Catalog> for CatalogDocument {
    fn from(catalog: Catalog) -> Self {
        CatalogDocument {
            products: catalog.products,
        }
    }
}

impl Catalog {
    /// Build a catalog, rejecting duplicate product ids.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CommerceError::DuplicateProductId(product.id));
            }
        }
        Ok(Self { products })
    }

    /// The storefront's built-in six product catalog.
    pub fn builtin() -> Self {
        Self {
            products: vec![
                Product::new(1, "Laptop", 50000, Category::Electronics, 5),
                Product::new(2, "Phone", 30000, Category::Electronics, 0),
                Product::new(3, "Shoes", 2000, Category::Fashion, 10),
                Product::new(4, "Watch", 4000, Category::Fashion, 3),
                Product::new(5, "Chair", 1500, Category::Furniture, 6),
                Product::new(6, "Table", 3500, Category::Furniture, 2),
            ],
        }
    }

    /// Parse a catalog from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, CommerceError> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        Catalog::new(doc.products)
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a product, failing if it is not in the catalog.
    pub fn require(&self, id: ProductId) -> Result<&Product, CommerceError> {
        self.get(id).ok_or(CommerceError::UnknownProduct(id))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Run a query against this catalog.
    pub fn query(&self, params: &QueryParams) -> Listing {
        Listing::new(query(&self.products, params))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
