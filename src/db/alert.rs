use std::sync::Arc;

use anyhow::Result;
use diesel::prelude::*;
use log::info;

use super::{establish_connection, schema::alerts, schema::alerts::dsl::*};
use crate::config::Config;
use crate::models::alert::{Alert, AlertStatus, InsertableAlert};

pub fn exists_by_user_and_link(
    config: &Arc<Config>,
    user: i32,
    alert_link: &str,
) -> Result<bool> {
    let connection = &mut establish_connection(config)?;

    let matching: Vec<Alert> = alerts::table
        .filter(alerts::user_id.eq(user))
        .filter(alerts::link.eq(alert_link))
        .select(Alert::as_select())
        .limit(1)
        .load(connection)?;

    Ok(!matching.is_empty())
}

/// Insert-or-ignore on the `(user_id, link)` unique key. Returns `None`
/// when a row for that key already exists, so two racing runs cannot
/// double-insert the same alert.
pub fn insert(config: &Arc<Config>, new_alert: InsertableAlert) -> Result<Option<Alert>> {
    let connection = &mut establish_connection(config)?;

    let inserted = diesel::insert_into(alerts::table)
        .values(new_alert)
        .on_conflict((user_id, link))
        .do_nothing()
        .returning(Alert::as_returning())
        .get_result(connection)
        .optional()?;

    if let Some(ref created) = inserted {
        info!("Inserted alert {} into alerts table", created.id);
    }

    Ok(inserted)
}

pub fn get_for_user(config: &Arc<Config>, user: i32) -> Result<Vec<Alert>> {
    let connection = &mut establish_connection(config)?;

    let rows: Vec<Alert> = alerts
        .filter(user_id.eq(user))
        .order(created_at.desc())
        .select(Alert::as_select())
        .load(connection)?;

    Ok(rows)
}

/// Scoped to the owning user so one user cannot flip another's alert.
pub fn update_status(
    config: &Arc<Config>,
    alert_id: i32,
    user: i32,
    new_status: AlertStatus,
) -> Result<usize> {
    let connection = &mut establish_connection(config)?;

    let updated = diesel::update(
        alerts
            .filter(id.eq(alert_id))
            .filter(user_id.eq(user)),
    )
    .set(status.eq(new_status))
    .execute(connection)?;

    Ok(updated)
}
