use std::sync::Arc;

use anyhow::{anyhow, Result};

use crate::config::Config;
use crate::db;
use crate::models::alert::{Alert, AlertStatus};

pub fn list(config: &Arc<Config>, user_id: i32) -> Result<Vec<Alert>> {
    db::alert::get_for_user(config, user_id)
}

pub fn update_status(
    config: &Arc<Config>,
    user_id: i32,
    alert_id: i32,
    status: AlertStatus,
) -> Result<()> {
    let updated = db::alert::update_status(config, alert_id, user_id, status)?;
    if updated == 0 {
        return Err(anyhow!("You don't have an alert with this ID"));
    }
    Ok(())
}

pub fn mark_not_interested(config: &Arc<Config>, user_id: i32, alert_id: i32) -> Result<()> {
    update_status(config, user_id, alert_id, AlertStatus::NotInterested)
}

pub fn restore(config: &Arc<Config>, user_id: i32, alert_id: i32) -> Result<()> {
    update_status(config, user_id, alert_id, AlertStatus::Active)
}
