//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod list;

use clap::Args;

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Case-insensitive title search.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category name, or "All".
    #[arg(short, long)]
    pub category: Option<String>,

    /// Sort mode: none, low/price-asc, high/price-desc.
    #[arg(long)]
    pub sort: Option<String>,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Actions to run in order, e.g. "add 1" "qty 1 3" "undo".
    pub actions: Vec<String>,

    /// File with one action per line, run before inline actions.
    #[arg(short, long)]
    pub script: Option<String>,
}

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Only check that the catalog loads.
    #[arg(long)]
    pub validate: bool,
}
