//! Price bounds filter.

use crate::query::QueryState;
use crate::traits::Filter;
use catalog::Listing;

/// Keeps listings priced within the query's bounds, both ends inclusive.
///
/// An inverted range (min > max) keeps nothing. Callers are expected to
/// go through the clamping `QueryState` setters so this never happens.
pub struct PriceRangeFilter;

impl Filter for PriceRangeFilter {
    fn name(&self) -> &str {
        "PriceRangeFilter"
    }

    fn apply(&self, listings: Vec<Listing>, query: &QueryState) -> Vec<Listing> {
        if query.price.is_inverted() {
            tracing::debug!(
                "Inverted price range {}..={}, nothing can match",
                query.price.min,
                query.price.max
            );
            return Vec::new();
        }

        listings
            .into_iter()
            .filter(|listing| query.price.contains(listing.price))
            .collect()
    }
}
