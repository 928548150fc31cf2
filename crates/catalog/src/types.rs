//! Core domain types for storage listings.
//!
//! A `Listing` is one storage offering as it arrives from the backend or
//! from a fixture file. Listings are plain data: the discovery pipeline
//! reads them, never mutates them, and hands back fresh copies.

use crate::distance::parse_distance;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// Identifiers and units
// =============================================================================

/// Price in the host locale's currency unit (won in the bundled fixture)
pub type Price = u64;

/// Opaque listing identifier.
///
/// The backend hands out string ids while older fixtures used bare
/// numbers, so both deserialize into the same textual id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawListingId", into = "String")]
pub struct ListingId(String);

impl ListingId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ListingId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u64> for ListingId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<ListingId> for String {
    fn from(id: ListingId) -> Self {
        id.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawListingId {
    Text(String),
    Number(u64),
}

impl From<RawListingId> for ListingId {
    fn from(raw: RawListingId) -> Self {
        match raw {
            RawListingId::Text(text) => ListingId(text),
            RawListingId::Number(n) => ListingId::from(n),
        }
    }
}

// =============================================================================
// Listing
// =============================================================================

/// One storage offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    /// Distance from the viewer as display text, e.g. "0.8km"
    pub distance: String,
    pub price: Price,
    /// Average review score, 0.0 to 5.0
    pub rating: f32,
    #[serde(rename = "reviews", default)]
    pub review_count: u32,
    #[serde(rename = "image", default)]
    pub image_url: String,
    #[serde(rename = "isFavorite", default)]
    pub is_favorite: bool,
}

impl Listing {
    /// Create a listing with no reviews, image or favorite flag
    pub fn new(
        id: impl Into<ListingId>,
        title: impl Into<String>,
        distance: impl Into<String>,
        price: Price,
        rating: f32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            distance: distance.into(),
            price,
            rating,
            review_count: 0,
            image_url: String::new(),
            is_favorite: false,
        }
    }

    /// Numeric distance used for "nearest first" ordering.
    ///
    /// Unparseable distance text yields `f64::INFINITY`.
    pub fn distance_magnitude(&self) -> f64 {
        parse_distance(&self.distance)
    }

    pub fn with_reviews(mut self, review_count: u32) -> Self {
        self.review_count = review_count;
        self
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn with_favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }
}

// =============================================================================
// ListingCatalog - the in-memory listing collection
// =============================================================================

/// Listings in catalog order plus an id index.
///
/// Catalog order is the order listings were inserted (fixture order), and
/// is the order the discovery pipeline receives them in.
#[derive(Debug, Clone, Default)]
pub struct ListingCatalog {
    pub(crate) listings: Vec<Listing>,
    pub(crate) positions: HashMap<ListingId, usize>,
}

impl ListingCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from listings in the given order.
    ///
    /// A later listing with an already-seen id replaces the earlier one.
    pub fn from_listings(listings: impl IntoIterator<Item = Listing>) -> Self {
        let mut catalog = Self::new();
        for listing in listings {
            catalog.insert_listing(listing);
        }
        catalog
    }

    /// Get a listing by id
    pub fn get_listing(&self, id: &ListingId) -> Option<&Listing> {
        self.positions.get(id).map(|&pos| &self.listings[pos])
    }

    /// All listings in catalog order
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Listings the user has saved, in catalog order
    pub fn favorites(&self) -> Vec<&Listing> {
        self.listings.iter().filter(|l| l.is_favorite).collect()
    }

    pub fn favorite_ids(&self) -> Vec<ListingId> {
        self.listings
            .iter()
            .filter(|l| l.is_favorite)
            .map(|l| l.id.clone())
            .collect()
    }

    /// Insert a listing, replacing (in place) any listing with the same id
    pub fn insert_listing(&mut self, listing: Listing) {
        match self.positions.get(&listing.id) {
            Some(&pos) => self.listings[pos] = listing,
            None => {
                self.positions.insert(listing.id.clone(), self.listings.len());
                self.listings.push(listing);
            }
        }
    }
}
