use std::io::Write;

use chrono::NaiveDateTime;
use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::pg::{Pg, PgValue};
use diesel::prelude::*;
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use serde::{Deserialize, Serialize};

/// Two-state alert lifecycle. The pipeline only ever inserts `Active`
/// rows; users flip the state afterwards.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, AsExpression, FromSqlRow, Serialize, Deserialize,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    Active,
    NotInterested,
}

impl AlertStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertStatus::Active => "active",
            AlertStatus::NotInterested => "not_interested",
        }
    }
}

impl ToSql<Text, Pg> for AlertStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for AlertStatus {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match std::str::from_utf8(bytes.as_bytes())? {
            "active" => Ok(AlertStatus::Active),
            "not_interested" => Ok(AlertStatus::NotInterested),
            other => Err(format!("unknown alert status: {other}").into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Serialize)]
#[diesel(table_name = crate::db::schema::alerts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Alert {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub price: i32,
    pub link: String,
    pub rooms: i32,
    pub city: String,
    pub status: AlertStatus,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::db::schema::alerts)]
pub struct InsertableAlert {
    pub user_id: i32,
    pub title: String,
    pub price: i32,
    pub link: String,
    pub rooms: i32,
    pub city: String,
}
