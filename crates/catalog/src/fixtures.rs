//! Built-in storage spots.
//!
//! The same four listings the home screen shows before the backend is
//! wired up. Useful for demos (`luggy --fixtures`) and tests.

use crate::types::Listing;

pub fn storage_spots() -> Vec<Listing> {
    vec![
        Listing::new("1", "Secure Student Locker", "0.2km", 30000, 4.8)
            .with_reviews(124)
            .with_image("https://images.unsplash.com/photo-1590247813693-5541d1c609fd?w=800&q=80"),
        Listing::new("2", "Spacious Basement Storage", "0.5km", 45000, 4.9)
            .with_reviews(89)
            .with_image("https://images.unsplash.com/photo-1586105251261-72a756497a11?w=800&q=80")
            .with_favorite(true),
        Listing::new("3", "Near Campus Center", "0.8km", 35000, 4.7)
            .with_reviews(56)
            .with_image("https://images.unsplash.com/photo-1600585154340-be6161a56a0c?w=800&q=80"),
        Listing::new("4", "Climate Controlled Unit", "1.2km", 55000, 5.0)
            .with_reviews(42)
            .with_image("https://images.unsplash.com/photo-1565514020176-db7933f383e2?w=800&q=80"),
    ]
}
