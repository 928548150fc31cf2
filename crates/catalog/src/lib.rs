//! # Catalog Crate
//!
//! Storage listings and the in-memory catalog that holds them.
//!
//! ## Main Components
//!
//! - **types**: `Listing`, `ListingId`, `ListingCatalog`
//! - **distance**: leading-magnitude parsing of distance text
//! - **parser**: listings.json / favorites.json reading and writing
//! - **index**: catalog loading, favorites, validation
//! - **fixtures**: the built-in storage spots
//! - **error**: error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{ListingCatalog, ListingId};
//! use std::path::Path;
//!
//! let catalog = ListingCatalog::load_from_dir(Path::new("data"))?;
//! let saved = catalog.with_favorite_toggled(&ListingId::new("3"))?;
//!
//! println!("{} saved listings", saved.favorites().len());
//! ```

pub mod distance;
pub mod error;
pub mod fixtures;
pub mod index;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use distance::{DISTANCE_FALLBACK, parse_distance};
pub use error::{CatalogError, Result};
pub use types::{Listing, ListingCatalog, ListingId, Price};
