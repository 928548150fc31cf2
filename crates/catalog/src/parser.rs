//! Parser for listing fixture files.
//!
//! Two JSON files make up a catalog directory:
//! - listings.json: array of listing objects (see `Listing`)
//! - favorites.json: array of listing ids the user has saved
//!
//! Malformed JSON is reported with the file name and the line serde_json
//! points at.

use crate::error::{CatalogError, Result};
use crate::types::{Listing, ListingId};
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Parse a JSON array of listings.
///
/// `source` names the input in error messages.
pub fn parse_listings_str(text: &str, source: &str) -> Result<Vec<Listing>> {
    let listings: Vec<Listing> =
        serde_json::from_str(text).map_err(|e| CatalogError::ParseError {
            file: source.to_string(),
            line: e.line(),
            reason: e.to_string(),
        })?;

    // Ids must be unique within a single fixture
    let mut seen = HashSet::with_capacity(listings.len());
    for listing in &listings {
        if !seen.insert(&listing.id) {
            return Err(CatalogError::DuplicateListing {
                id: listing.id.to_string(),
            });
        }
    }

    Ok(listings)
}

/// Parse the listings.json file
pub fn parse_listings(path: &Path) -> Result<Vec<Listing>> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(e),
    })?;
    parse_listings_str(&text, &file_label(path))
}

/// Parse the favorites.json file.
///
/// A missing file means the user has no favorites yet.
pub fn parse_favorites(path: &Path) -> Result<Vec<ListingId>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    serde_json::from_str(&text).map_err(|e| CatalogError::ParseError {
        file: file_label(path),
        line: e.line(),
        reason: e.to_string(),
    })
}

/// Write favorite ids as a pretty-printed JSON array
pub fn write_favorites(path: &Path, ids: &[ListingId]) -> Result<()> {
    let json = serde_json::to_string_pretty(ids).map_err(|e| CatalogError::InvalidValue {
        field: "favorites".to_string(),
        value: e.to_string(),
    })?;
    fs::write(path, json)?;
    Ok(())
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
