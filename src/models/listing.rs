use serde::{Deserialize, Serialize};

/// A candidate apartment as returned by a listing source. Never persisted
/// as-is; `link` is the identity used for deduplication against alerts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub title: String,
    pub price: i32,
    pub rooms: i32,
    pub city: String,
    pub link: String,
}
