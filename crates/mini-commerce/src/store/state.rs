//! The store state and its reducer.

use serde::{Deserialize, Serialize};

use crate::cart::{CartLedger, CartTotals};
use crate::catalog::Catalog;
use crate::error::CartRejection;
use crate::search::{Listing, QueryParams};
use crate::store::Action;

/// Everything a storefront session holds.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoreState {
    /// Current search, category and sort.
    pub params: QueryParams,
    /// Current cart.
    pub cart: CartLedger,
}

impl StoreState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the given parameters with an empty cart.
    pub fn with_params(params: QueryParams) -> Self {
        Self {
            params,
            cart: CartLedger::new(),
        }
    }

    /// Apply an action, keeping the current state when it cannot apply.
    pub fn reduce(&self, catalog: &Catalog, action: &Action) -> Self {
        self.try_reduce(catalog, action)
            .unwrap_or_else(|_| self.clone())
    }

    /// Apply an action, or report why the cart refused it.
    ///
    /// Query actions always succeed.
    pub fn try_reduce(&self, catalog: &Catalog, action: &Action) -> Result<Self, CartRejection> {
        let mut next = self.clone();
        match action {
            Action::SetSearch(text) => next.params.search_text = text.clone(),
            Action::SetCategory(category) => next.params.category = *category,
            Action::SetSort(sort) => next.params.sort = *sort,
            Action::ClearFilters => next.params.clear(),
            Action::AddToCart(id) => {
                let product = catalog.get(*id).ok_or(CartRejection::NotInCatalog(*id))?;
                next.cart = self.cart.try_add(product)?;
            }
            Action::UpdateQty { id, qty } => {
                let stock = self.cart.get(*id).map_or(0, |e| e.product.stock);
                next.cart = self.cart.try_update_qty(*id, *qty, stock)?;
            }
            Action::RemoveItem(id) => next.cart = self.cart.try_remove(*id)?,
        }
        Ok(next)
    }

    /// The product listing for the current parameters.
    pub fn listing(&self, catalog: &Catalog) -> Listing {
        catalog.query(&self.params)
    }

    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }
}
