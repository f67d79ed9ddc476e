pub mod olx;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::listing::Listing;

/// A provider of candidate listings for one city. Implementations are
/// external and unreliable; a failed fetch is reported to the caller,
/// never swallowed here.
#[async_trait]
pub trait ListingSource: Send + Sync {
    async fn fetch(&self, city: &str) -> Result<Vec<Listing>>;

    fn source_name(&self) -> &'static str;
}
