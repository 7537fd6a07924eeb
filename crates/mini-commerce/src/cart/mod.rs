//! Shopping cart module.
//!
//! Contains the stock-bounded cart ledger and its totals.

mod ledger;
mod totals;

pub use ledger::{CartEntry, CartLedger};
pub use totals::CartTotals;
