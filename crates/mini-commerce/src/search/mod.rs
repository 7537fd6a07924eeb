//! Search module.
//!
//! Contains query parameters, the filter/sort engine, listings, and an
//! opt-in memo for repeated queries.

mod engine;
mod memo;
mod params;
mod results;

pub use engine::query;
pub use memo::QueryMemo;
pub use params::{CategoryFilter, QueryParams, SortMode};
pub use results::Listing;
