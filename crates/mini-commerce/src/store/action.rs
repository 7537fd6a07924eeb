//! User actions dispatched to the store.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::ProductId;
use crate::error::CommerceError;
use crate::search::{CategoryFilter, SortMode};

/// A discrete user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Action {
    /// Replace the search text.
    SetSearch(String),
    /// Select a category.
    SetCategory(CategoryFilter),
    /// Select a sort mode.
    SetSort(SortMode),
    /// Reset search, category and sort.
    ClearFilters,
    /// Add one unit of a catalog product.
    AddToCart(ProductId),
    /// Set the quantity of a cart entry.
    UpdateQty { id: ProductId, qty: i64 },
    /// Drop a cart entry.
    RemoveItem(ProductId),
}

impl Action {
    /// Whether this action only touches the cart.
    pub fn is_cart_action(&self) -> bool {
        matches!(
            self,
            Action::AddToCart(_) | Action::UpdateQty { .. } | Action::RemoveItem(_)
        )
    }
}

/// Parses the one-line command form:
///
/// ```text
/// search <text>      category <name>     sort <mode>     clear
/// add <id>           qty <id> <n>        remove <id>
/// ```
impl FromStr for Action {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim_start();
        let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
        let invalid = |reason: &str| CommerceError::InvalidAction {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        match verb {
            "search" => Ok(Action::SetSearch(rest.to_string())),
            "category" => Ok(Action::SetCategory(rest.trim().parse()?)),
            "sort" => Ok(Action::SetSort(rest.trim().parse()?)),
            "clear" => Ok(Action::ClearFilters),
            "add" | "remove" | "qty" => {
                let mut args = rest.split_whitespace();
                let id = args
                    .next()
                    .ok_or_else(|| invalid("missing product id"))?
                    .parse::<u32>()
                    .map(ProductId::new)
                    .map_err(|_| invalid("product id must be a non-negative integer"))?;

                let action = match verb {
                    "add" => Action::AddToCart(id),
                    "remove" => Action::RemoveItem(id),
                    _ => {
                        let qty = args
                            .next()
                            .ok_or_else(|| invalid("missing quantity"))?
                            .parse::<i64>()
                            .map_err(|_| invalid("quantity must be an integer"))?;
                        Action::UpdateQty { id, qty }
                    }
                };

                if args.next().is_some() {
                    return Err(invalid("unexpected trailing arguments"));
                }
                Ok(action)
            }
            "" => Err(invalid("empty action")),
            other => Err(invalid(&format!("unknown action `{}`", other))),
        }
    }
}
