//! The user's current discovery intent.
//!
//! `QueryState` is owned by whatever drives the UI. Its mutators mirror the
//! discrete controls on the search sheet (typing, presets, the two price
//! sliders, sort choice, reset) and all of them keep `min <= max`. The
//! pipeline only ever reads it.

use crate::error::QueryError;
use catalog::Price;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upper end of the price sliders, and the default maximum
pub const PRICE_CEILING: Price = 100_000;

/// Slider granularity
pub const PRICE_STEP: Price = 5_000;

// =============================================================================
// Sort key
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Ascending parsed distance
    #[default]
    Nearest,
    PriceAscending,
    PriceDescending,
    RatingDescending,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Nearest,
        SortKey::PriceAscending,
        SortKey::PriceDescending,
        SortKey::RatingDescending,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Nearest => "nearest",
            SortKey::PriceAscending => "price-ascending",
            SortKey::PriceDescending => "price-descending",
            SortKey::RatingDescending => "rating-descending",
        }
    }

    /// Label shown on the sort sheet
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Nearest => "Nearest first",
            SortKey::PriceAscending => "Price: Low to High",
            SortKey::PriceDescending => "Price: High to Low",
            SortKey::RatingDescending => "Highest rated",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = QueryError;

    /// Accepts the canonical names and the app's short names
    /// (`distance`, `price-low`, `price-high`, `rating`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" | "distance" => Ok(SortKey::Nearest),
            "price-ascending" | "price-low" => Ok(SortKey::PriceAscending),
            "price-descending" | "price-high" => Ok(SortKey::PriceDescending),
            "rating-descending" | "rating" => Ok(SortKey::RatingDescending),
            _ => Err(QueryError::UnknownSortKey(s.to_string())),
        }
    }
}

// =============================================================================
// Price range and presets
// =============================================================================

/// Inclusive price bounds.
///
/// `new` does not reorder its arguments: an inverted range is representable
/// and simply contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Price,
    pub max: Price,
}

impl PriceRange {
    pub const fn new(min: Price, max: Price) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: Price) -> bool {
        self.min <= price && price <= self.max
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(0, PRICE_CEILING)
    }
}

/// One-tap price buttons on the filter sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PricePreset {
    Under30k,
    From30kTo50k,
    Over50k,
}

impl PricePreset {
    pub fn range(&self) -> PriceRange {
        match self {
            PricePreset::Under30k => PriceRange::new(0, 30_000),
            PricePreset::From30kTo50k => PriceRange::new(30_000, 50_000),
            PricePreset::Over50k => PriceRange::new(50_000, PRICE_CEILING),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PricePreset::Under30k => "Under ₩30k",
            PricePreset::From30kTo50k => "₩30-50k",
            PricePreset::Over50k => "Over ₩50k",
        }
    }
}

impl FromStr for PricePreset {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "under-30k" => Ok(PricePreset::Under30k),
            "30k-50k" => Ok(PricePreset::From30kTo50k),
            "over-50k" => Ok(PricePreset::Over50k),
            _ => Err(QueryError::UnknownPreset(s.to_string())),
        }
    }
}

// =============================================================================
// QueryState
// =============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryState {
    pub search: String,
    pub price: PriceRange,
    pub sort: SortKey,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Move the minimum slider. Pushes the maximum up if it would fall
    /// below the new minimum.
    pub fn set_min_price(&mut self, value: Price) {
        let value = value.min(PRICE_CEILING);
        self.price.min = value;
        if self.price.max < value {
            self.price.max = value;
        }
    }

    /// Move the maximum slider. Pulls the minimum down if it would exceed
    /// the new maximum.
    pub fn set_max_price(&mut self, value: Price) {
        let value = value.min(PRICE_CEILING);
        self.price.max = value;
        if self.price.min > value {
            self.price.min = value;
        }
    }

    pub fn apply_preset(&mut self, preset: PricePreset) {
        self.price = preset.range();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// "Reset" on the filter sheet: price bounds only
    pub fn reset_price(&mut self) {
        self.price = PriceRange::default();
    }

    /// "Reset All Filters": price, sort and search text
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn has_active_filters(&self) -> bool {
        self.price.min > 0 || self.price.max < PRICE_CEILING
    }

    /// Lower-cased search text, or `None` when it is blank.
    ///
    /// Whitespace only decides blankness. A non-blank needle keeps its
    /// surrounding spaces, so `" campus"` does not match "Campus Locker".
    pub fn normalized_search(&self) -> Option<String> {
        if self.search.trim().is_empty() {
            None
        } else {
            Some(self.search.to_lowercase())
        }
    }
}
