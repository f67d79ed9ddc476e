pub mod alert;
pub mod filter;
pub mod profile;
pub mod schema;

use std::sync::Arc;

use anyhow::{Context, Result};
use diesel::{Connection, PgConnection};

use crate::alerts::{AlertStore, FilterStore, ProfileStore};
use crate::config::Config;
use crate::models::alert::{Alert, InsertableAlert};
use crate::models::filter::Filter;
use crate::models::profile::NotificationPrefs;

pub fn establish_connection(config: &Arc<Config>) -> Result<PgConnection> {
    PgConnection::establish(&config.db_path)
        .with_context(|| format!("Error connecting to {}", config.db_path))
}

/// Postgres-backed implementation of the pipeline's store interfaces.
#[derive(Clone)]
pub struct PgStores {
    config: Arc<Config>,
}

impl PgStores {
    pub fn new(config: Arc<Config>) -> Self {
        PgStores { config }
    }
}

impl FilterStore for PgStores {
    fn list(&self) -> Result<Vec<Filter>> {
        filter::get_active(&self.config)
    }
}

impl AlertStore for PgStores {
    fn exists_by_user_and_link(&self, user: i32, alert_link: &str) -> Result<bool> {
        alert::exists_by_user_and_link(&self.config, user, alert_link)
    }

    fn insert(&self, new_alert: InsertableAlert) -> Result<Option<Alert>> {
        alert::insert(&self.config, new_alert)
    }
}

impl ProfileStore for PgStores {
    fn notification_prefs(&self, user: i32) -> Result<Option<NotificationPrefs>> {
        profile::get_notification_prefs(&self.config, user)
    }
}
