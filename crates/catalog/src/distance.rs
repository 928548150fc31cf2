//! Distance text parsing.
//!
//! Listings carry their distance as display text ("0.8km", "350m", "N/A").
//! Ordering only needs the leading magnitude, so the unit suffix is ignored.

/// Value used for distance text with no leading number
pub const DISTANCE_FALLBACK: f64 = f64::INFINITY;

/// Extract the leading decimal magnitude from distance text.
///
/// Example: "0.8km" -> 0.8
///          " 12 m" -> 12.0
///          ".5mi"  -> 0.5
///          "N/A"   -> f64::INFINITY
pub fn parse_distance(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();

    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }

    if !seen_digit {
        return DISTANCE_FALLBACK;
    }

    // A trailing dot ("3.km") is not part of the number
    let number = text[..end].trim_end_matches('.');
    number.parse::<f64>().unwrap_or(DISTANCE_FALLBACK)
}
