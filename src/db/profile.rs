use std::sync::Arc;

use anyhow::Result;
use diesel::prelude::*;

use super::{establish_connection, schema::profiles, schema::profiles::dsl::*};
use crate::config::Config;
use crate::models::profile::{NotificationPrefs, Profile};

pub fn get_notification_prefs(
    config: &Arc<Config>,
    user: i32,
) -> Result<Option<NotificationPrefs>> {
    let connection = &mut establish_connection(config)?;

    let found: Option<Profile> = profiles
        .filter(user_id.eq(user))
        .select(Profile::as_select())
        .first(connection)
        .optional()?;

    Ok(found.map(NotificationPrefs::from))
}

pub fn set_email_notifications(config: &Arc<Config>, user: i32, enabled: bool) -> Result<usize> {
    let connection = &mut establish_connection(config)?;

    let updated = diesel::update(profiles.filter(user_id.eq(user)))
        .set(email_notifications.eq(enabled))
        .execute(connection)?;

    Ok(updated)
}

pub fn get_by_user(config: &Arc<Config>, user: i32) -> Result<Option<Profile>> {
    let connection = &mut establish_connection(config)?;

    let found = profiles
        .filter(user_id.eq(user))
        .select(Profile::as_select())
        .first(connection)
        .optional()?;

    Ok(found)
}
