//! Cart ledger and entries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cart::CartTotals;
use crate::catalog::{Product, ProductId};
use crate::error::{CartRejection, CommerceError};

/// A product in the cart with the quantity selected.
///
/// `qty` is always in `1..=product.stock`. An entry that would drop to zero
/// is removed from the ledger instead. Deserialization enforces the same
/// bound.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "EntryDocument", into = "EntryDocument")]
pub struct CartEntry {
    /// Product as it was when last added.
    pub product: Product,
    /// Quantity selected.
    pub qty: u32,
}

impl CartEntry {
    /// `qty * price`, saturating.
    pub fn line_total(&self) -> u64 {
        u64::from(self.qty).saturating_mul(self.product.price)
    }
}

/// The session's cart: product id to entry.
///
/// Every operation returns a new ledger and leaves `self` untouched, so
/// previous states can be kept for undo or compared to decide on re-renders.
/// Operations that cannot apply return an unchanged copy; the `try_*`
/// variants report why.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "LedgerDocument", into = "LedgerDocument")]
pub struct CartLedger {
    entries: BTreeMap<ProductId, CartEntry>,
}

/// Wire form of a [`CartEntry`], checked on the way in.
#[derive(Serialize, Deserialize)]
struct EntryDocument {
    product: Product,
    qty: u32,
}

impl TryFrom<EntryDocument> for CartEntry {
    type Error = CommerceError;

    fn try_from(doc: EntryDocument) -> Result<Self, Self::Error> {
        let stock = doc.product.stock;
        if !(1..=stock).contains(&doc.qty) {
            return Err(CommerceError::InvalidCartEntry {
                id: doc.product.id,
                reason: format!("quantity {} is outside 1..={}", doc.qty, stock),
            });
        }
        Ok(CartEntry {
            product: doc.product,
            qty: doc.qty,
        })
    }
}

impl From<CartEntry> for EntryDocument {
    fn from(entry: CartEntry) -> Self {
        EntryDocument {
            product: entry.product,
            qty: entry.qty,
        }
    }
}

/// Wire form of a [`CartLedger`]; keys must match the entry's product id.
#[derive(Serialize, Deserialize)]
struct LedgerDocument {
    entries: BTreeMap<ProductId, CartEntry>,
}

impl TryFrom<LedgerDocument> for CartLedger {
    type Error = CommerceError;

    fn try_from(doc: LedgerDocument) -> Result<Self, Self::Error> {
        for (key, entry) in &doc.entries {
            if *key != entry.product.id {
                return Err(CommerceError::InvalidCartEntry {
                    id: *key,
                    reason: format!("entry holds product {}", entry.product.id),
                });
            }
        }
        Ok(CartLedger {
            entries: doc.entries,
        })
    }
}

impl From<CartLedger> for LedgerDocument {
    fn from(ledger: CartLedger) -> Self {
        LedgerDocument {
            entries: ledger.entries,
        }
    }
}

impl CartLedger {
    /// Message shown for a cart with no entries.
    pub const EMPTY_MESSAGE: &'static str = "Empty cart";

    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`.
    ///
    /// A no-op when the product is out of stock or the cart already holds
    /// `product.stock` units.
    pub fn add_to_cart(&self, product: &Product) -> Self {
        self.try_add(product).unwrap_or_else(|_| self.clone())
    }

    /// Set the quantity of an entry.
    ///
    /// A no-op unless the entry exists and `1 <= new_qty <= stock`.
    pub fn update_qty(&self, id: ProductId, new_qty: i64, stock: u32) -> Self {
        self.try_update_qty(id, new_qty, stock)
            .unwrap_or_else(|_| self.clone())
    }

    /// Remove an entry. A no-op when absent.
    pub fn remove_item(&self, id: ProductId) -> Self {
        self.try_remove(id).unwrap_or_else(|_| self.clone())
    }

    /// Add one unit of `product`, or say why not.
    ///
    /// Re-adding refreshes the entry's product snapshot.
    pub fn try_add(&self, product: &Product) -> Result<Self, CartRejection> {
        let current = self.entries.get(&product.id).map_or(0, |e| e.qty);

        if product.stock == 0 {
            return Err(rejected(CartRejection::OutOfStock(product.id)));
        }
        if current >= product.stock {
            return Err(rejected(CartRejection::StockLimitReached {
                id: product.id,
                stock: product.stock,
            }));
        }

        let mut next = self.clone();
        next.entries.insert(
            product.id,
            CartEntry {
                product: product.clone(),
                qty: current + 1,
            },
        );
        Ok(next)
    }

    /// Set an entry's quantity, or say why not.
    ///
    /// `new_qty` must lie in `1..=stock` and must not exceed the stock held
    /// in the entry's snapshot.
    pub fn try_update_qty(
        &self,
        id: ProductId,
        new_qty: i64,
        stock: u32,
    ) -> Result<Self, CartRejection> {
        let entry = self
            .entries
            .get(&id)
            .ok_or_else(|| rejected(CartRejection::NotInCart(id)))?;

        let bound = stock.min(entry.product.stock);
        let qty = u32::try_from(new_qty)
            .ok()
            .filter(|q| (1..=bound).contains(q))
            .ok_or_else(|| {
                rejected(CartRejection::QuantityOutOfRange {
                    id,
                    requested: new_qty,
                    stock: bound,
                })
            })?;

        let mut next = self.clone();
        if let Some(entry) = next.entries.get_mut(&id) {
            entry.qty = qty;
        }
        Ok(next)
    }

    /// Remove an entry, or say it was not there.
    pub fn try_remove(&self, id: ProductId) -> Result<Self, CartRejection> {
        if !self.entries.contains_key(&id) {
            return Err(rejected(CartRejection::NotInCart(id)));
        }
        let mut next = self.clone();
        next.entries.remove(&id);
        Ok(next)
    }

    /// Item count and price over all entries.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from_entries(self.entries.values())
    }

    /// Get an entry by product id.
    pub fn get(&self, id: ProductId) -> Option<&CartEntry> {
        self.entries.get(&id)
    }

    /// Quantity held for a product, 0 when absent.
    pub fn qty_of(&self, id: ProductId) -> u32 {
        self.entries.get(&id).map_or(0, |e| e.qty)
    }

    /// Entries ordered by product id.
    pub fn entries(&self) -> impl Iterator<Item = &CartEntry> {
        self.entries.values()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn rejected(reason: CartRejection) -> CartRejection {
    debug!(%reason, "cart operation rejected");
    reason
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Category};

    fn laptop() -> Product {
        Product::new(1, "Laptop", 50000, Category::Electronics, 5)
    }

    fn phone() -> Product {
        Product::new(2, "Phone", 30000, Category::Electronics, 0)
    }

    #[test]
    fn test_add_creates_entry() {
        let cart = CartLedger::new().add_to_cart(&laptop());
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.qty_of(ProductId::new(1)), 1);
    }

    #[test]
    fn test_add_same_item_increments() {
        let product = laptop();
        let cart = CartLedger::new()
            .add_to_cart(&product)
            .add_to_cart(&product)
            .add_to_cart(&product);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.qty_of(product.id), 3);
    }

    #[test]
    fn test_add_out_of_stock_is_noop() {
        let cart = CartLedger::new();
        assert_eq!(cart.add_to_cart(&phone()), cart);
        assert_eq!(
            cart.try_add(&phone()),
            Err(CartRejection::OutOfStock(ProductId::new(2)))
        );
    }

    #[test]
    fn test_add_stops_at_stock() {
        let table = Product::new(6, "Table", 3500, Category::Furniture, 2);
        let full = CartLedger::new().add_to_cart(&table).add_to_cart(&table);
        assert_eq!(full.qty_of(table.id), 2);

        assert_eq!(full.add_to_cart(&table), full);
        assert_eq!(
            full.try_add(&table),
            Err(CartRejection::StockLimitReached {
                id: table.id,
                stock: 2
            })
        );
    }

    #[test]
    fn test_add_leaves_original_untouched() {
        let empty = CartLedger::new();
        let one = empty.add_to_cart(&laptop());
        assert!(empty.is_empty());
        assert_eq!(one.len(), 1);
    }

    #[test]
    fn test_update_qty_within_bounds() {
        let product = laptop();
        let cart = CartLedger::new().add_to_cart(&product);
        let updated = cart.update_qty(product.id, 4, product.stock);
        assert_eq!(updated.qty_of(product.id), 4);
        assert_eq!(updated.update_qty(product.id, 5, 5).qty_of(product.id), 5);
    }

    #[test]
    fn test_update_qty_out_of_range_is_noop() {
        let product = laptop();
        let cart = CartLedger::new().add_to_cart(&product).add_to_cart(&product);

        for qty in [-3, 0, 6, 100] {
            assert_eq!(cart.update_qty(product.id, qty, product.stock), cart);
        }
        assert_eq!(
            cart.try_update_qty(product.id, 0, 5),
            Err(CartRejection::QuantityOutOfRange {
                id: product.id,
                requested: 0,
                stock: 5
            })
        );
    }

    #[test]
    fn test_update_qty_respects_snapshot_stock() {
        let product = laptop();
        let cart = CartLedger::new().add_to_cart(&product);
        // Caller claims more stock than the entry was added with.
        assert_eq!(cart.update_qty(product.id, 8, 10), cart);
    }

    #[test]
    fn test_update_qty_missing_entry_is_noop() {
        let cart = CartLedger::new();
        assert_eq!(cart.update_qty(ProductId::new(1), 2, 5), cart);
        assert_eq!(
            cart.try_update_qty(ProductId::new(1), 2, 5),
            Err(CartRejection::NotInCart(ProductId::new(1)))
        );
    }

    #[test]
    fn test_remove_item() {
        let product = laptop();
        let cart = CartLedger::new().add_to_cart(&product);
        assert!(cart.remove_item(product.id).is_empty());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let cart = CartLedger::new().add_to_cart(&laptop());
        assert_eq!(cart.remove_item(ProductId::new(9)), cart);
        assert!(cart.try_remove(ProductId::new(9)).is_err());
    }

    #[test]
    fn test_readd_after_remove_starts_at_one() {
        let product = laptop();
        let cart = CartLedger::new()
            .add_to_cart(&product)
            .add_to_cart(&product)
            .remove_item(product.id)
            .add_to_cart(&product);
        assert_eq!(cart.qty_of(product.id), 1);
    }

    #[test]
    fn test_entries_ordered_by_id() {
        let catalog = Catalog::builtin();
        let cart = [6, 3, 1]
            .into_iter()
            .filter_map(|id| catalog.get(ProductId::new(id)))
            .fold(CartLedger::new(), |cart, p| cart.add_to_cart(p));

        let ids: Vec<u32> = cart.entries().map(|e| e.product.id.get()).collect();
        assert_eq!(ids, vec![1, 3, 6]);
    }

    #[test]
    fn test_line_total() {
        let entry = CartEntry {
            product: Product::new(5, "Chair", 1500, Category::Furniture, 6),
            qty: 2,
        };
        assert_eq!(entry.line_total(), 3000);
    }

    #[test]
    fn test_update_qty_reports_snapshot_bound() {
        let cart = CartLedger::new().add_to_cart(&laptop());
        let err = cart.try_update_qty(ProductId::new(1), 8, 10).unwrap_err();
        assert_eq!(
            err,
            CartRejection::QuantityOutOfRange {
                id: ProductId::new(1),
                requested: 8,
                stock: 5,
            }
        );
    }

    #[test]
    fn test_ledger_json_roundtrip() {
        let cart = CartLedger::new()
            .add_to_cart(&laptop())
            .add_to_cart(&laptop());
        let json = serde_json::to_string(&cart).unwrap();
        let back: CartLedger = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cart);
    }

    #[test]
    fn test_deserialize_rejects_zero_qty() {
        let json = r#"{"entries":{"1":{"product":{"id":1,"title":"Laptop","price":50000,"category":"Electronics","stock":5},"qty":0}}}"#;
        assert!(serde_json::from_str::<CartLedger>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_qty_over_stock() {
        let json = r#"{"entries":{"2":{"product":{"id":2,"title":"Phone","price":30000,"category":"Electronics","stock":0},"qty":7}}}"#;
        let err = serde_json::from_str::<CartLedger>(json).unwrap_err();
        assert!(err.to_string().contains("outside 1..=0"));
    }

    #[test]
    fn test_deserialize_rejects_mismatched_key() {
        let json = r#"{"entries":{"1":{"product":{"id":9,"title":"Laptop","price":50000,"category":"Electronics","stock":5},"qty":2}}}"#;
        let err = serde_json::from_str::<CartLedger>(json).unwrap_err();
        assert!(err.to_string().contains("entry holds product 9"));
    }
}
