//! Free-text search over listing titles and distance text.

use crate::query::QueryState;
use crate::traits::Filter;
use catalog::Listing;

/// Keeps listings whose title or distance text contains the search text.
///
/// ## Algorithm
/// 1. If the search text is blank, keep every listing
/// 2. Otherwise lower-case it, keeping any surrounding spaces
/// 3. Keep a listing if its lower-cased title OR its lower-cased distance
///    text contains the search text
pub struct SearchTextFilter;

impl SearchTextFilter {
    pub fn matches(listing: &Listing, needle: &str) -> bool {
        listing.title.to_lowercase().contains(needle)
            || listing.distance.to_lowercase().contains(needle)
    }
}

impl Filter for SearchTextFilter {
    fn name(&self) -> &str {
        "SearchTextFilter"
    }

    fn apply(&self, listings: Vec<Listing>, query: &QueryState) -> Vec<Listing> {
        let Some(needle) = query.normalized_search() else {
            return listings;
        };

        listings
            .into_iter()
            .filter(|listing| Self::matches(listing, &needle))
            .collect()
    }
}
