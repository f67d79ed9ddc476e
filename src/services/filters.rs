use std::sync::Arc;

use anyhow::{anyhow, Result};

use crate::config::Config;
use crate::db;
use crate::models::filter::{Filter, InsertableFilter};

pub fn validate(city: &str, max_price: i32, min_rooms: i32) -> Result<String> {
    let city = city.trim();
    if city.chars().count() < 2 {
        return Err(anyhow!("City name is too short"));
    }
    if max_price < 1 {
        return Err(anyhow!("Max price must be at least 1"));
    }
    if min_rooms < 1 {
        return Err(anyhow!("Must have at least 1 room"));
    }
    Ok(city.to_string())
}

fn owned_by(config: &Arc<Config>, user_id: i32, filter_id: i32) -> Result<Filter> {
    match db::filter::get_by_id(config, filter_id)? {
        Some(filter) if filter.user_id == user_id => Ok(filter),
        _ => Err(anyhow!("You don't have a filter with this ID")),
    }
}

pub fn create(
    config: &Arc<Config>,
    user_id: i32,
    city: &str,
    max_price: i32,
    min_rooms: i32,
) -> Result<Filter> {
    let city = validate(city, max_price, min_rooms)?;

    db::filter::insert(
        config,
        InsertableFilter {
            user_id,
            city,
            max_price,
            min_rooms,
        },
    )
}

pub fn update(
    config: &Arc<Config>,
    user_id: i32,
    filter_id: i32,
    city: &str,
    max_price: i32,
    min_rooms: i32,
) -> Result<Filter> {
    let city = validate(city, max_price, min_rooms)?;
    owned_by(config, user_id, filter_id)?;

    db::filter::update(config, filter_id, &city, max_price, min_rooms)
}

pub fn toggle(config: &Arc<Config>, user_id: i32, filter_id: i32) -> Result<Filter> {
    let existing = owned_by(config, user_id, filter_id)?;

    db::filter::set_active(config, filter_id, !existing.is_active)
}

pub fn delete(config: &Arc<Config>, user_id: i32, filter_id: i32) -> Result<()> {
    owned_by(config, user_id, filter_id)?;

    db::filter::delete(config, filter_id)?;
    Ok(())
}

pub fn list(config: &Arc<Config>, user_id: i32) -> Result<Vec<Filter>> {
    db::filter::get_for_user(config, user_id)
}

#[cfg(test)]
mod tests {
    use super::validate;

    #[test]
    fn rejects_short_city() {
        assert!(validate("w", 1000, 1).is_err());
    }

    #[test]
    fn rejects_non_positive_price_and_rooms() {
        assert!(validate("warszawa", 0, 1).is_err());
        assert!(validate("warszawa", 1000, 0).is_err());
    }

    #[test]
    fn trims_city() {
        assert_eq!(validate("  warszawa  ", 1000, 1).unwrap(), "warszawa");
    }
}
