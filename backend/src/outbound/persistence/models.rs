//! Internal Diesel row structs and the JSON shape of stored exercises.
//!
//! None of these types leave the persistence module.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::schema::users;

/// Row struct for reading full user documents.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub exercises: serde_json::Value,
    #[expect(dead_code, reason = "schema field for auditing support")]
    pub created_at: DateTime<Utc>,
    #[expect(dead_code, reason = "schema field for auditing support")]
    pub updated_at: DateTime<Utc>,
}

/// Row struct for the identity-only listing.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserProfileRow {
    pub id: Uuid,
    pub username: String,
}

/// Insertable struct for user documents.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub username: &'a str,
    pub exercises: &'a serde_json::Value,
}

/// Changeset struct for replacing a stored document.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserUpdate<'a> {
    pub username: &'a str,
    pub exercises: &'a serde_json::Value,
}

/// JSON representation of one element of the `exercises` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ExerciseDocument {
    pub description: String,
    pub duration: u32,
    pub date: NaiveDate,
}
