//! ListingCatalog loading, favorites and validation.
//!
//! Builds a catalog from a fixture directory:
//! - listings.json provides the listings in display order
//! - favorites.json marks the ones the user has saved
//!
//! Favorites never change a catalog in place. Toggling derives a new
//! catalog, so any collection already handed to the discovery pipeline
//! stays untouched.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use std::path::Path;
use tracing::{debug, info, warn};

impl ListingCatalog {
    /// Load a catalog from a fixture directory
    ///
    /// Steps:
    /// 1. Parse listings.json and favorites.json in parallel
    /// 2. Index listings in file order
    /// 3. Mark favorites
    /// 4. Validate
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        let listings_path = data_dir.join("listings.json");
        let favorites_path = data_dir.join("favorites.json");

        let (listings, favorites) = rayon::join(
            || parser::parse_listings(&listings_path),
            || parser::parse_favorites(&favorites_path),
        );
        let listings = listings?;
        let favorites = favorites?;

        info!(
            "Loaded {} listings and {} favorites from {}",
            listings.len(),
            favorites.len(),
            data_dir.display()
        );

        let mut catalog = ListingCatalog::from_listings(listings);
        catalog.apply_favorites(&favorites);
        catalog.validate()?;

        Ok(catalog)
    }

    /// Mark the given ids as favorites.
    ///
    /// Ids that are not in the catalog are skipped with a warning; a stale
    /// favorites file should not make the catalog unloadable.
    pub fn apply_favorites(&mut self, ids: &[ListingId]) {
        for id in ids {
            match self.positions.get(id) {
                Some(&pos) => self.listings[pos].is_favorite = true,
                None => warn!("Favorite {} is not in the catalog, skipping", id),
            }
        }
    }

    /// Derive a new catalog with one listing's favorite flag flipped
    pub fn with_favorite_toggled(&self, id: &ListingId) -> Result<Self> {
        let pos = *self
            .positions
            .get(id)
            .ok_or_else(|| CatalogError::MissingReference { id: id.to_string() })?;

        let mut next = self.clone();
        let listing = &mut next.listings[pos];
        listing.is_favorite = !listing.is_favorite;
        debug!("Listing {} favorite = {}", id, listing.is_favorite);

        Ok(next)
    }

    /// Validate listing values
    ///
    /// Check that:
    /// - Ratings are finite and within 0.0 - 5.0
    ///
    /// Distance text that doesn't parse is allowed; those listings sort
    /// last under "nearest first".
    pub fn validate(&self) -> Result<()> {
        for listing in &self.listings {
            if !listing.rating.is_finite() || !(0.0..=5.0).contains(&listing.rating) {
                return Err(CatalogError::InvalidValue {
                    field: format!("rating of listing {}", listing.id),
                    value: listing.rating.to_string(),
                });
            }
            if listing.distance_magnitude().is_infinite() {
                debug!(
                    "Listing {} has unparseable distance {:?}",
                    listing.id, listing.distance
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use std::path::PathBuf;

    fn bundled_data_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data")
    }

    #[test]
    fn test_load_bundled_fixture() {
        let catalog = ListingCatalog::load_from_dir(&bundled_data_dir()).unwrap();

        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.listings()[0].title, "Secure Student Locker");

        let favorites = catalog.favorites();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].id.as_str(), "2");
    }

    #[test]
    fn test_load_missing_dir() {
        let err = ListingCatalog::load_from_dir(Path::new("no/such/dir")).unwrap_err();
        assert!(matches!(err, CatalogError::FileNotFound { .. }));
    }

    #[test]
    fn test_toggle_derives_new_catalog() {
        let catalog = ListingCatalog::from_listings(fixtures::storage_spots());
        let id = ListingId::new("1");

        let toggled = catalog.with_favorite_toggled(&id).unwrap();

        assert!(!catalog.get_listing(&id).unwrap().is_favorite);
        assert!(toggled.get_listing(&id).unwrap().is_favorite);

        let back = toggled.with_favorite_toggled(&id).unwrap();
        assert_eq!(back.listings(), catalog.listings());
    }

    #[test]
    fn test_toggle_unknown_listing() {
        let catalog = ListingCatalog::from_listings(fixtures::storage_spots());
        let err = catalog.with_favorite_toggled(&ListingId::new("99")).unwrap_err();
        assert!(matches!(err, CatalogError::MissingReference { id } if id == "99"));
    }

    #[test]
    fn test_apply_favorites_skips_unknown_ids() {
        let mut catalog = ListingCatalog::from_listings(fixtures::storage_spots());
        catalog.apply_favorites(&[ListingId::new("3"), ListingId::new("missing")]);

        let ids = catalog.favorite_ids();
        assert_eq!(ids, vec![ListingId::new("2"), ListingId::new("3")]);
    }

    #[test]
    fn test_validate_rejects_out_of_range_rating() {
        let catalog = ListingCatalog::from_listings(vec![
            Listing::new("1", "Locker", "0.2km", 30000, 5.5),
        ]);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::InvalidValue { .. })
        ));

        let catalog = ListingCatalog::from_listings(vec![
            Listing::new("1", "Locker", "0.2km", 30000, f32::NAN),
        ]);
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_unparseable_distance() {
        let catalog = ListingCatalog::from_listings(vec![
            Listing::new("1", "Somewhere", "N/A", 30000, 4.0),
        ]);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_favorites_round_trip_through_file() {
        let dir = std::env::temp_dir().join(format!("catalog-favorites-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("favorites.json");

        let ids = vec![ListingId::new("2"), ListingId::new("4")];
        parser::write_favorites(&path, &ids).unwrap();
        assert_eq!(parser::parse_favorites(&path).unwrap(), ids);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
