use std::sync::Arc;

use anyhow::Result;
use diesel::prelude::*;
use log::info;

use super::{establish_connection, schema::filters, schema::filters::dsl::*};
use crate::config::Config;
use crate::models::filter::{Filter, InsertableFilter};

pub fn insert(config: &Arc<Config>, new_filter: InsertableFilter) -> Result<Filter> {
    let mut connection = establish_connection(config)?;

    let created: Filter = diesel::insert_into(filters::table)
        .values(new_filter)
        .returning(Filter::as_returning())
        .get_result(&mut connection)?;

    info!("Inserted filter {} into filters table", created.id);
    Ok(created)
}

pub fn update(
    config: &Arc<Config>,
    filter_id: i32,
    new_city: &str,
    new_max_price: i32,
    new_min_rooms: i32,
) -> Result<Filter> {
    let connection = &mut establish_connection(config)?;

    let updated: Filter = diesel::update(filters.filter(id.eq(filter_id)))
        .set((
            city.eq(new_city),
            max_price.eq(new_max_price),
            min_rooms.eq(new_min_rooms),
            updated_at.eq(diesel::dsl::now),
        ))
        .returning(Filter::as_returning())
        .get_result(connection)?;

    Ok(updated)
}

pub fn set_active(config: &Arc<Config>, filter_id: i32, active: bool) -> Result<Filter> {
    let connection = &mut establish_connection(config)?;

    let updated: Filter = diesel::update(filters.filter(id.eq(filter_id)))
        .set((is_active.eq(active), updated_at.eq(diesel::dsl::now)))
        .returning(Filter::as_returning())
        .get_result(connection)?;

    Ok(updated)
}

pub fn delete(config: &Arc<Config>, filter_id: i32) -> Result<usize> {
    let connection = &mut establish_connection(config)?;

    let deleted = diesel::delete(filters.filter(id.eq(filter_id))).execute(connection)?;
    info!("Deleted {} row(s) in filters with ID: {}", deleted, filter_id);

    Ok(deleted)
}

/// Filters the pipeline should evaluate: every row with `is_active` set.
pub fn get_active(config: &Arc<Config>) -> Result<Vec<Filter>> {
    let connection = &mut establish_connection(config)?;

    let active: Vec<Filter> = filters
        .filter(is_active.eq(true))
        .select(Filter::as_select())
        .load(connection)?;

    Ok(active)
}

pub fn get_for_user(config: &Arc<Config>, user: i32) -> Result<Vec<Filter>> {
    let connection = &mut establish_connection(config)?;

    let rows: Vec<Filter> = filters
        .filter(user_id.eq(user))
        .select(Filter::as_select())
        .load(connection)?;

    Ok(rows)
}

pub fn get_by_id(config: &Arc<Config>, filter_id: i32) -> Result<Option<Filter>> {
    let connection = &mut establish_connection(config)?;

    let found = filters
        .filter(id.eq(filter_id))
        .select(Filter::as_select())
        .first(connection)
        .optional()?;

    Ok(found)
}
