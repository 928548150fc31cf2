//! Core traits for the discovery pipeline.
//!
//! This module defines the Filter trait that lets predicate stages be
//! composed into a FilterPipeline.

use crate::query::QueryState;
use catalog::Listing;

/// A predicate stage over a listing collection.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across threads
/// - Filters take ownership of the Vec<Listing> and return a filtered Vec,
///   so each stage moves listings along instead of cloning them
/// - Filters keep the relative order of the listings they pass through
/// - Filters are total: a query that matches nothing yields an empty Vec
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of listings.
    ///
    /// # Arguments
    /// * `listings` - The listings to filter (takes ownership)
    /// * `query` - The user's current search text, price bounds and sort
    fn apply(&self, listings: Vec<Listing>, query: &QueryState) -> Vec<Listing>;
}
