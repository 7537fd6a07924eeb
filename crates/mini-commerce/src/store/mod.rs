//! Storefront state container.
//!
//! [`StoreState`] bundles the query parameters and the cart. Views derive
//! everything else from it. [`Action`]s are the only way to change it, and
//! [`History`] keeps past states for undo/redo.

mod action;
mod history;
mod state;

pub use action::Action;
pub use history::History;
pub use state::StoreState;
