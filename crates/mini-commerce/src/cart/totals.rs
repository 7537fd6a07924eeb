//! Cart totals.

use serde::{Deserialize, Serialize};

use crate::cart::CartEntry;

/// Aggregates shown under the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct CartTotals {
    /// Sum of entry quantities.
    pub total_items: u64,
    /// Sum of `qty * price` over entries.
    pub total_price: u64,
}

impl CartTotals {
    /// Sum over entries. Saturates instead of overflowing.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a CartEntry>) -> Self {
        entries
            .into_iter()
            .fold(CartTotals::default(), |acc, entry| CartTotals {
                total_items: acc.total_items.saturating_add(u64::from(entry.qty)),
                total_price: acc.total_price.saturating_add(entry.line_total()),
            })
    }

    pub fn is_zero(&self) -> bool {
        self.total_items == 0 && self.total_price == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Product};

    fn entry(id: u32, price: u64, qty: u32) -> CartEntry {
        CartEntry {
            product: Product::new(id, format!("Item {id}"), price, Category::Fashion, 100),
            qty,
        }
    }

    #[test]
    fn test_empty_totals() {
        let totals = CartTotals::from_entries(std::iter::empty::<&CartEntry>());
        assert_eq!(totals, CartTotals { total_items: 0, total_price: 0 });
        assert!(totals.is_zero());
    }

    #[test]
    fn test_single_entry() {
        let entries = [entry(5, 1500, 2)];
        let totals = CartTotals::from_entries(&entries);
        assert_eq!(totals.total_items, 2);
        assert_eq!(totals.total_price, 3000);
    }

    #[test]
    fn test_multiple_entries() {
        let entries = [entry(1, 1000, 2), entry(2, 2000, 1)];
        let totals = CartTotals::from_entries(&entries);
        assert_eq!(totals.total_items, 3);
        assert_eq!(totals.total_price, 4000); // 2*1000 + 1*2000
    }

    #[test]
    fn test_saturates() {
        let entries = [entry(1, u64::MAX, 2), entry(2, 1, 1)];
        let totals = CartTotals::from_entries(&entries);
        assert_eq!(totals.total_price, u64::MAX);
        assert_eq!(totals.total_items, 3);
    }
}
