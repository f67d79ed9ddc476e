use std::sync::Arc;

use anyhow::{anyhow, Result};

use crate::config::Config;
use crate::db;
use crate::models::profile::Profile;

pub fn get(config: &Arc<Config>, user_id: i32) -> Result<Profile> {
    db::profile::get_by_user(config, user_id)?
        .ok_or_else(|| anyhow!("No profile for this user"))
}

pub fn set_email_notifications(
    config: &Arc<Config>,
    user_id: i32,
    enabled: bool,
) -> Result<()> {
    let updated = db::profile::set_email_notifications(config, user_id, enabled)?;
    if updated == 0 {
        return Err(anyhow!("No profile for this user"));
    }
    Ok(())
}
