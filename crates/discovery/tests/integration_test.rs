//! Integration tests for the discovery pipeline.
//!
//! These run `discover` end to end over small catalogs and check the
//! properties the home screen relies on.

use catalog::{Listing, ListingCatalog, fixtures};
use discovery::filters::SearchTextFilter;
use discovery::{PriceRange, QueryState, SortKey, discover};

fn campus_and_downtown() -> Vec<Listing> {
    vec![
        Listing::new("1", "Campus Locker", "0.2km", 30000, 4.8),
        Listing::new("2", "Downtown Room", "0.5km", 45000, 4.9),
    ]
}

fn titles(listings: &[Listing]) -> Vec<&str> {
    listings.iter().map(|l| l.title.as_str()).collect()
}

fn query(search: &str, min: u64, max: u64, sort: SortKey) -> QueryState {
    QueryState {
        search: search.to_string(),
        price: PriceRange::new(min, max),
        sort,
    }
}

/// A mixed collection with duplicate keys, odd distances and prices at
/// the default bounds
fn mixed_listings() -> Vec<Listing> {
    vec![
        Listing::new("m1", "Garage Corner", "1.5km", 20000, 4.1),
        Listing::new("m2", "Campus Shelf", "0.3km", 0, 3.9),
        Listing::new("m3", "Attic Nook", "N/A", 30000, 4.8),
        Listing::new("m4", "Campus Closet", "0.3km", 30000, 4.8),
        Listing::new("m5", "Downtown Cellar", "2km", 100000, 4.5),
        Listing::new("m6", "Riverside Locker", "", 45000, 4.1),
        Listing::new("m7", "Penthouse Closet", "0.9km", 100001, 5.0),
        Listing::new("m8", "Station Locker", "0.3 km", 30000, 4.8),
    ]
}

fn sample_queries() -> Vec<QueryState> {
    let mut queries = Vec::new();
    for search in ["", "  ", "campus", "LOCKER", "km", "0.3", "nothing here"] {
        for (min, max) in [
            (0, 100000),
            (30000, 30000),
            (20000, 50000),
            (0, 0),
            (60000, 10000),
        ] {
            for sort in SortKey::ALL {
                queries.push(query(search, min, max, sort));
            }
        }
    }
    queries
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn scenario_a_price_ascending() {
    let found = discover(
        &campus_and_downtown(),
        &query("", 0, 100000, SortKey::PriceAscending),
    );
    assert_eq!(titles(&found), vec!["Campus Locker", "Downtown Room"]);
}

#[test]
fn scenario_b_search_text() {
    let found = discover(
        &campus_and_downtown(),
        &query("downtown", 0, 100000, SortKey::PriceAscending),
    );
    assert_eq!(titles(&found), vec!["Downtown Room"]);
}

#[test]
fn scenario_c_price_bounds() {
    let found = discover(
        &campus_and_downtown(),
        &query("", 40000, 100000, SortKey::PriceAscending),
    );
    assert_eq!(titles(&found), vec!["Downtown Room"]);
}

#[test]
fn scenario_d_rating_descending() {
    let found = discover(
        &campus_and_downtown(),
        &query("", 0, 100000, SortKey::RatingDescending),
    );
    assert_eq!(titles(&found), vec!["Downtown Room", "Campus Locker"]);
}

#[test]
fn leading_space_in_search_is_matched_literally() {
    let listings = vec![
        Listing::new("1", "Campus Locker", "0.2km", 30000, 4.8),
        Listing::new("2", "Near Campus Center", "0.8km", 35000, 4.7),
    ];

    let found = discover(&listings, &query(" campus", 0, 100000, SortKey::Nearest));
    assert_eq!(titles(&found), vec!["Near Campus Center"]);

    let found = discover(&listings, &query("campus", 0, 100000, SortKey::Nearest));
    assert_eq!(titles(&found), vec!["Campus Locker", "Near Campus Center"]);
}

#[test]
fn scenario_e_unparseable_distance_sorts_last() {
    for position in 0..3 {
        let mut listings = campus_and_downtown();
        listings.push(Listing::new("3", "Unknown Spot", "0.1km", 10000, 4.0));
        listings.insert(position, Listing::new("na", "Far Away Shed", "N/A", 20000, 4.5));

        let found = discover(&listings, &query("", 0, 100000, SortKey::Nearest));

        assert_eq!(found.len(), 4);
        assert_eq!(found.last().unwrap().title, "Far Away Shed");
        assert_eq!(
            titles(&found[..3]),
            vec!["Unknown Spot", "Campus Locker", "Downtown Room"]
        );
    }
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn every_result_satisfies_both_predicates() {
    let listings = mixed_listings();

    for q in sample_queries() {
        let found = discover(&listings, &q);
        let needle = q.normalized_search();

        for listing in &found {
            assert!(
                q.price.contains(listing.price),
                "{:?} outside {:?}",
                listing.id,
                q.price
            );
            if let Some(needle) = &needle {
                assert!(SearchTextFilter::matches(listing, needle));
            }
        }

        // Nothing that satisfies both predicates is left out
        let expected = listings
            .iter()
            .filter(|l| q.price.contains(l.price))
            .filter(|l| {
                needle
                    .as_deref()
                    .is_none_or(|n| SearchTextFilter::matches(l, n))
            })
            .count();
        assert_eq!(found.len(), expected, "query {q:?}");
    }
}

#[test]
fn results_are_a_reordering_of_the_input() {
    let listings = mixed_listings();

    for q in sample_queries() {
        for listing in discover(&listings, &q) {
            assert!(listings.contains(&listing));
        }
    }
}

#[test]
fn discover_is_idempotent() {
    let listings = mixed_listings();

    for q in sample_queries() {
        let first = discover(&listings, &q);
        let second = discover(&listings, &q);
        assert_eq!(first, second);

        // Replaying the output through the same query changes nothing
        assert_eq!(discover(&first, &q), first, "query {q:?}");
    }
}

#[test]
fn empty_search_filters_only_by_price() {
    let listings = mixed_listings();

    // Price-only filtering of mixed_listings, then a stable price sort
    let expected = vec!["m1", "m3", "m4", "m8", "m6"];

    for search in ["", "   ", "\t\n"] {
        let found = discover(
            &listings,
            &query(search, 20000, 45000, SortKey::PriceAscending),
        );
        let ids: Vec<&str> = found.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, expected, "search {search:?}");
    }
}

#[test]
fn equal_keys_keep_input_order() {
    let listings = mixed_listings();

    // m3, m4 and m8 share price 30000 and rating 4.8
    let found = discover(&listings, &query("", 30000, 30000, SortKey::PriceAscending));
    let ids: Vec<&str> = found.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["m3", "m4", "m8"]);

    let found = discover(&listings, &query("", 30000, 30000, SortKey::RatingDescending));
    let ids: Vec<&str> = found.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["m3", "m4", "m8"]);

    // m2, m4 and m8 are all 0.3 away; m3 ("N/A") and m6 ("") sort last
    let found = discover(&listings, &query("", 0, 100000, SortKey::Nearest));
    let ids: Vec<&str> = found.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["m2", "m4", "m8", "m1", "m5", "m3", "m6"]);
}

#[test]
fn bounds_are_inclusive() {
    let listings = mixed_listings();

    let found = discover(&listings, &query("", 0, 100000, SortKey::PriceAscending));
    let ids: Vec<&str> = found.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids.first(), Some(&"m2"));
    assert_eq!(ids.last(), Some(&"m5"));
    assert!(!ids.contains(&"m7"));
}

#[test]
fn inverted_bounds_yield_nothing() {
    let found = discover(&mixed_listings(), &query("", 60000, 10000, SortKey::Nearest));
    assert!(found.is_empty());
}

#[test]
fn non_matching_search_yields_nothing() {
    let found = discover(
        &mixed_listings(),
        &query("warehouse", 0, 100000, SortKey::Nearest),
    );
    assert!(found.is_empty());
}

#[test]
fn caller_listings_are_not_modified() {
    let listings = mixed_listings();
    let before = listings.clone();

    let _ = discover(&listings, &query("", 0, 100000, SortKey::PriceDescending));

    assert_eq!(listings, before);
}

#[test]
fn favorites_toggle_flows_into_discovery() {
    let catalog = ListingCatalog::from_listings(fixtures::storage_spots());
    let toggled = catalog
        .with_favorite_toggled(&"1".into())
        .expect("listing 1 exists");

    let mut q = QueryState::new();
    q.set_search("locker");

    let before = discover(catalog.listings(), &q);
    let after = discover(toggled.listings(), &q);

    assert!(!before[0].is_favorite);
    assert!(after[0].is_favorite);
    assert_eq!(before[0].id, after[0].id);
}
