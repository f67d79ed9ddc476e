use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Serialize)]
#[diesel(table_name = crate::db::schema::filters)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Filter {
    pub id: i32,
    pub user_id: i32,
    pub city: String,
    pub max_price: i32,
    pub min_rooms: i32,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::db::schema::filters)]
pub struct InsertableFilter {
    pub user_id: i32,
    pub city: String,
    pub max_price: i32,
    pub min_rooms: i32,
}
