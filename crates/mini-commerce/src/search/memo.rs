//! Memoized listings.

use std::collections::HashMap;

use tracing::trace;

use crate::catalog::Catalog;
use crate::search::{Listing, QueryParams};

/// Caches listings of one catalog keyed by query parameters.
///
/// The catalog never changes, so a listing only depends on the parameters
/// and a cached entry is never stale.
#[derive(Debug)]
pub struct QueryMemo<'c> {
    catalog: &'c Catalog,
    entries: HashMap<QueryParams, Listing>,
    hits: u64,
    misses: u64,
}

impl<'c> QueryMemo<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Listing for `params`, running the query only on first use.
    pub fn listing(&mut self, params: &QueryParams) -> &Listing {
        if self.entries.contains_key(params) {
            self.hits += 1;
            trace!(?params, "query memo hit");
        } else {
            self.misses += 1;
            let listing = self.catalog.query(params);
            self.entries.insert(params.clone(), listing);
        }
        &self.entries[params]
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Number of cached parameter sets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every cached listing.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SortMode;

    #[test]
    fn test_repeat_params_hit_cache() {
        let catalog = Catalog::builtin();
        let mut memo = QueryMemo::new(&catalog);
        let params = QueryParams::new().with_sort(SortMode::PriceAsc);

        let first = memo.listing(&params).clone();
        let second = memo.listing(&params).clone();

        assert_eq!(first, second);
        assert_eq!(memo.misses(), 1);
        assert_eq!(memo.hits(), 1);
    }

    #[test]
    fn test_distinct_params_miss() {
        let catalog = Catalog::builtin();
        let mut memo = QueryMemo::new(&catalog);

        memo.listing(&QueryParams::new());
        memo.listing(&QueryParams::new().with_search("a"));

        assert_eq!(memo.misses(), 2);
        assert_eq!(memo.len(), 2);
    }

    #[test]
    fn test_memo_matches_direct_query() {
        let catalog = Catalog::builtin();
        let mut memo = QueryMemo::new(&catalog);
        let params = QueryParams::new().with_search("t").with_sort(SortMode::PriceDesc);

        assert_eq!(*memo.listing(&params), catalog.query(&params));

        memo.clear();
        assert!(memo.is_empty());
    }
}
