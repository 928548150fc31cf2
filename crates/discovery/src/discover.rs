//! The discovery entry point: predicate stage, then ordering stage.
//!
//! `discover` is a pure function of its two arguments. It never mutates
//! the caller's listings, keeps no state between calls and never fails,
//! so it is safe to run on every keystroke.

use crate::filter_pipeline::FilterPipeline;
use crate::ordering::sort_listings;
use crate::query::QueryState;
use catalog::Listing;
use tracing::debug;

/// Filter and order `listings` for `query`.
///
/// Returns a freshly allocated Vec. An empty result means nothing matched;
/// callers render a "no results" state for it.
pub fn discover(listings: &[Listing], query: &QueryState) -> Vec<Listing> {
    discover_with(&FilterPipeline::predicate_stage(), listings, query)
}

/// Same as `discover`, with a caller-supplied predicate stage.
pub fn discover_with(
    predicates: &FilterPipeline,
    listings: &[Listing],
    query: &QueryState,
) -> Vec<Listing> {
    let filtered = predicates.apply(listings.to_vec(), query);
    let ordered = sort_listings(filtered, query.sort);

    debug!(
        "Discovered {} of {} listings (sort: {})",
        ordered.len(),
        listings.len(),
        query.sort
    );
    ordered
}
