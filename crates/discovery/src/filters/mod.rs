//! Predicate stage filters.
//!
//! Each filter narrows the listing collection by one criterion of the
//! query state. `FilterPipeline::predicate_stage` chains them.

pub mod price_range;
pub mod search_text;

// Re-export for convenience
pub use price_range::PriceRangeFilter;
pub use search_text::SearchTextFilter;
