pub mod generate;
pub mod notifier;

use anyhow::Result;

use crate::models::alert::{Alert, InsertableAlert};
use crate::models::filter::Filter;
use crate::models::profile::NotificationPrefs;

/// Source of the filters a pipeline run should evaluate.
pub trait FilterStore: Send + Sync {
    fn list(&self) -> Result<Vec<Filter>>;
}

/// Alert persistence with the dedup gate built in.
pub trait AlertStore: Send + Sync {
    fn exists_by_user_and_link(&self, user_id: i32, link: &str) -> Result<bool>;

    /// Insert-or-ignore keyed on `(user_id, link)`; `None` means the key
    /// already had a row and nothing was written.
    fn insert(&self, alert: InsertableAlert) -> Result<Option<Alert>>;
}

pub trait ProfileStore: Send + Sync {
    fn notification_prefs(&self, user_id: i32) -> Result<Option<NotificationPrefs>>;
}
