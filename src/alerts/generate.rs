use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use log::{error, info};
use serde::Serialize;
use tokio::sync::Mutex;

use super::notifier::{format_alert_email, EmailSender, OutgoingEmail, ResendMailer};
use super::{AlertStore, FilterStore, ProfileStore};
use crate::config::Config;
use crate::db::PgStores;
use crate::matcher;
use crate::models::alert::{Alert, InsertableAlert};
use crate::models::filter::Filter;
use crate::models::listing::Listing;
use crate::scraper::olx::OlxScraper;
use crate::scraper::ListingSource;

/// Run-wide counters, folded from the per-filter reports.
/// `checked == created + duplicates_skipped` holds by construction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct RunSummary {
    pub filters_processed: u32,
    pub checked: u32,
    pub created: u32,
    pub duplicates_skipped: u32,
}

impl RunSummary {
    fn absorb(&mut self, report: &FilterReport) {
        self.filters_processed += 1;
        self.checked += report.checked();
        self.created += report.created;
        self.duplicates_skipped += report.duplicates;
    }
}

/// Outcome of one filter's pass. A matched listing whose insert errored
/// lands in `insert_failures` and counts as neither created nor duplicate.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FilterReport {
    pub filter_id: i32,
    pub created: u32,
    pub duplicates: u32,
    pub insert_failures: u32,
}

impl FilterReport {
    pub fn checked(&self) -> u32 {
        self.created + self.duplicates
    }
}

/// Drives one best-effort pass over all active filters: fetch listings,
/// match, dedup-insert, notify. No failure inside a run is fatal.
pub struct AlertGenerator {
    filters: Arc<dyn FilterStore>,
    alerts: Arc<dyn AlertStore>,
    profiles: Arc<dyn ProfileStore>,
    source: Arc<dyn ListingSource>,
    mailer: Arc<dyn EmailSender>,
    // Overlapping triggers (schedule + manual) serialize here.
    run_lock: Mutex<()>,
}

impl AlertGenerator {
    pub fn new(
        filters: Arc<dyn FilterStore>,
        alerts: Arc<dyn AlertStore>,
        profiles: Arc<dyn ProfileStore>,
        source: Arc<dyn ListingSource>,
        mailer: Arc<dyn EmailSender>,
    ) -> Self {
        AlertGenerator {
            filters,
            alerts,
            profiles,
            source,
            mailer,
            run_lock: Mutex::new(()),
        }
    }

    /// Production wiring: Postgres stores, the OLX scraper and Resend.
    pub fn from_config(config: &Arc<Config>) -> Result<Self> {
        let stores = Arc::new(PgStores::new(config.clone()));
        let source = Arc::new(OlxScraper::new(config)?);
        let mailer = Arc::new(ResendMailer::new(config)?);

        Ok(AlertGenerator::new(
            stores.clone(),
            stores.clone(),
            stores,
            source,
            mailer,
        ))
    }

    /// One full pass over every stored filter. Always returns a summary;
    /// per-item failures are logged and folded into the counters.
    pub async fn generate_alerts(&self) -> RunSummary {
        let _run = self.run_lock.lock().await;

        let start = Instant::now();
        info!("Starting alert generation run");

        let stored_filters = match self.filters.list() {
            Ok(filters) => filters,
            Err(e) => {
                error!("Failed to list filters, aborting run: {:?}", e);
                return RunSummary::default();
            }
        };

        let mut summary = RunSummary::default();
        for filter in &stored_filters {
            let report = self.process_filter(filter).await;
            summary.absorb(&report);
        }

        info!(
            "Finished alert generation run in {:?}: {:?}",
            start.elapsed(),
            summary
        );
        summary
    }

    async fn process_filter(&self, filter: &Filter) -> FilterReport {
        let mut report = FilterReport {
            filter_id: filter.id,
            ..FilterReport::default()
        };

        let listings = match self.source.fetch(&filter.city).await {
            Ok(listings) => listings,
            Err(e) => {
                error!(
                    "Failed to fetch listings for filter {} (city {}): {:?}",
                    filter.id, filter.city, e
                );
                return report;
            }
        };

        let matched = matcher::match_listings(&listings, filter);

        let mut new_alerts: Vec<Alert> = Vec::new();
        for listing in matched {
            match self.classify_listing(filter, &listing) {
                Ok(Some(alert)) => {
                    report.created += 1;
                    new_alerts.push(alert);
                }
                Ok(None) => {
                    info!("Alert already exists: {}", listing.link);
                    report.duplicates += 1;
                }
                Err(e) => {
                    report.insert_failures += 1;
                    error!(
                        "Failed to persist alert for listing {}: {:?}",
                        listing.link, e
                    );
                }
            }
        }

        if !new_alerts.is_empty() {
            self.notify(filter, &new_alerts).await;
        }

        report
    }

    /// Classifies one matched listing: `Some` when a new alert was created,
    /// `None` when it was a duplicate. The existence check covers the common
    /// case; the store's insert-or-ignore key closes the race underneath it.
    fn classify_listing(&self, filter: &Filter, listing: &Listing) -> Result<Option<Alert>> {
        if self
            .alerts
            .exists_by_user_and_link(filter.user_id, &listing.link)?
        {
            return Ok(None);
        }

        self.alerts.insert(InsertableAlert {
            user_id: filter.user_id,
            title: listing.title.clone(),
            price: listing.price,
            link: listing.link.clone(),
            rooms: listing.rooms,
            city: listing.city.clone(),
        })
    }

    /// Best-effort, post-persistence: a send failure never touches the
    /// alerts already written for this filter.
    async fn notify(&self, filter: &Filter, new_alerts: &[Alert]) {
        let prefs = match self.profiles.notification_prefs(filter.user_id) {
            Ok(Some(prefs)) => prefs,
            Ok(None) => {
                info!(
                    "No profile for user {}, skipping notification",
                    filter.user_id
                );
                return;
            }
            Err(e) => {
                error!(
                    "Failed to load notification prefs for user {}: {:?}",
                    filter.user_id, e
                );
                return;
            }
        };

        if !prefs.email_notifications {
            info!(
                "Email notifications disabled for user {}, skipping",
                filter.user_id
            );
            return;
        }

        let to = match prefs.email {
            Some(email) if !email.trim().is_empty() => email,
            _ => {
                info!("No email address for user {}, skipping", filter.user_id);
                return;
            }
        };

        let (subject, body) = format_alert_email(&filter.city, new_alerts);
        let email = OutgoingEmail { to, subject, body };

        match self.mailer.send(&email).await {
            Ok(()) => info!(
                "Sent {} new alert(s) for filter {} to user {}",
                new_alerts.len(),
                filter.id,
                filter.user_id
            ),
            Err(e) => error!(
                "Failed to send alert email for filter {}: {:?}",
                filter.id, e
            ),
        }
    }
}
