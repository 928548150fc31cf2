//! Ordering stage: one comparator per sort key.
//!
//! Sorting is stable, so listings that compare equal keep the order the
//! predicate stage produced.

use crate::query::SortKey;
use catalog::Listing;
use std::cmp::Ordering;

pub type Comparator = fn(&Listing, &Listing) -> Ordering;

/// Comparator for a sort key
pub fn comparator(key: SortKey) -> Comparator {
    match key {
        SortKey::Nearest => by_distance,
        SortKey::PriceAscending => by_price_ascending,
        SortKey::PriceDescending => by_price_descending,
        SortKey::RatingDescending => by_rating_descending,
    }
}

/// Unparseable distances are infinite and land at the end
fn by_distance(a: &Listing, b: &Listing) -> Ordering {
    a.distance_magnitude().total_cmp(&b.distance_magnitude())
}

fn by_price_ascending(a: &Listing, b: &Listing) -> Ordering {
    a.price.cmp(&b.price)
}

fn by_price_descending(a: &Listing, b: &Listing) -> Ordering {
    b.price.cmp(&a.price)
}

fn by_rating_descending(a: &Listing, b: &Listing) -> Ordering {
    b.rating.total_cmp(&a.rating)
}

/// Stable sort of `listings` by `key`.
///
/// `Nearest` parses each distance once up front instead of on every
/// comparison.
pub fn sort_listings(mut listings: Vec<Listing>, key: SortKey) -> Vec<Listing> {
    if key == SortKey::Nearest {
        let mut keyed: Vec<(f64, Listing)> = listings
            .into_iter()
            .map(|listing| (listing.distance_magnitude(), listing))
            .collect();
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
        return keyed.into_iter().map(|(_, listing)| listing).collect();
    }

    listings.sort_by(comparator(key));
    listings
}
