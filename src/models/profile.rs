use diesel::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Serialize)]
#[diesel(table_name = crate::db::schema::profiles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Profile {
    pub id: i32,
    pub user_id: i32,
    pub email: Option<String>,
    pub email_notifications: bool,
}

/// The slice of a profile the notifier cares about.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationPrefs {
    pub email: Option<String>,
    pub email_notifications: bool,
}

impl From<Profile> for NotificationPrefs {
    fn from(profile: Profile) -> Self {
        NotificationPrefs {
            email: profile.email,
            email_notifications: profile.email_notifications,
        }
    }
}
