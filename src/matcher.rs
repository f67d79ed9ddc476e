use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::models::{filter::Filter, listing::Listing};

/// Fold a city name down to a comparable form: NFD-decompose, drop the
/// combining marks, lowercase, trim. "Kraków" and "krakow" compare equal.
pub fn normalize(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}

/// Whether a single listing satisfies a filter: price at or under the
/// ceiling, rooms at or over the floor, and the same city modulo
/// diacritics and casing.
pub fn listing_matches(listing: &Listing, filter: &Filter) -> bool {
    listing.price <= filter.max_price
        && listing.rooms >= filter.min_rooms
        && normalize(&listing.city) == normalize(&filter.city)
}

/// Pure predicate over a batch; result order equals input order.
pub fn match_listings(listings: &[Listing], filter: &Filter) -> Vec<Listing> {
    listings
        .iter()
        .filter(|listing| listing_matches(listing, filter))
        .cloned()
        .collect()
}
