//! Listing discovery: the filter, sort and search pipeline behind the
//! home screen.
//!
//! This crate provides:
//! - QueryState, the user's search text, price bounds and sort key
//! - Filter trait and the predicate filters (search text, price range)
//! - FilterPipeline for composing filters
//! - The ordering stage's comparator table
//! - `discover`, which runs the predicate stage then the ordering stage
//! - ResultSequencer for discarding stale asynchronous results
//!
//! ## Architecture
//! `discover` processes listings in stages:
//! 1. Filters drop listings that don't match the search text or price
//! 2. The survivors are stably sorted by the query's sort key
//!
//! ## Example Usage
//! ```ignore
//! use discovery::{discover, QueryState, SortKey, PricePreset};
//!
//! let mut query = QueryState::new();
//! query.set_search("campus");
//! query.apply_preset(PricePreset::Under30k);
//! query.set_sort(SortKey::RatingDescending);
//!
//! let shown = discover(catalog.listings(), &query);
//! ```

pub mod discover;
pub mod error;
pub mod filter_pipeline;
pub mod filters;
pub mod ordering;
pub mod query;
pub mod sequencing;
pub mod traits;

// Re-export main types
pub use discover::{discover, discover_with};
pub use error::QueryError;
pub use filter_pipeline::FilterPipeline;
pub use query::{PRICE_CEILING, PRICE_STEP, PricePreset, PriceRange, QueryState, SortKey};
pub use sequencing::{ResultSequencer, Ticket};
pub use traits::Filter;
