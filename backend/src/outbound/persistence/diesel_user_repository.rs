//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! Each user is a single row; the exercise log is stored as a JSONB array
//! and rebuilt through the validated domain constructors on read.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{
    Description, DurationMinutes, Exercise, User, UserId, UserProfile, Username,
};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{ExerciseDocument, NewUserRow, UserProfileRow, UserRow, UserUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the user repository port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserRepositoryError {
    map_basic_pool_error(error, UserRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> UserRepositoryError {
    map_basic_diesel_error(
        error,
        UserRepositoryError::query,
        UserRepositoryError::connection,
    )
}

fn encode_exercises(user: &User) -> Result<serde_json::Value, UserRepositoryError> {
    let documents: Vec<ExerciseDocument> = user
        .exercises()
        .iter()
        .map(|exercise| ExerciseDocument {
            description: exercise.description().as_ref().to_owned(),
            duration: exercise.duration().minutes(),
            date: exercise.date(),
        })
        .collect();
    serde_json::to_value(documents)
        .map_err(|err| UserRepositoryError::query(format!("serialise exercises: {err}")))
}

fn decode_exercises(value: serde_json::Value) -> Result<Vec<Exercise>, UserRepositoryError> {
    let documents: Vec<ExerciseDocument> = serde_json::from_value(value)
        .map_err(|err| UserRepositoryError::query(format!("decode exercises: {err}")))?;

    documents
        .into_iter()
        .map(|document| {
            let description = Description::new(document.description)
                .map_err(|err| UserRepositoryError::query(err.to_string()))?;
            Ok(Exercise::new(
                description,
                DurationMinutes::new(document.duration),
                document.date,
            ))
        })
        .collect()
}

fn decode_username(raw: String) -> Result<Username, UserRepositoryError> {
    Username::new(raw).map_err(|err| UserRepositoryError::query(err.to_string()))
}

/// Convert a database row into a validated user aggregate.
fn row_to_user(row: UserRow) -> Result<User, UserRepositoryError> {
    let UserRow {
        id,
        username,
        exercises,
        created_at: _,
        updated_at: _,
    } = row;

    Ok(User::restore(
        UserId::from_uuid(id),
        decode_username(username)?,
        decode_exercises(exercises)?,
    ))
}

fn row_to_profile(row: UserProfileRow) -> Result<UserProfile, UserRepositoryError> {
    Ok(UserProfile {
        id: UserId::from_uuid(row.id),
        username: decode_username(row.username)?,
    })
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let exercises = encode_exercises(user)?;

        let new_row = NewUserRow {
            id: *user.id().as_uuid(),
            username: user.username().as_ref(),
            exercises: &exercises,
        };

        diesel::insert_into(users::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn list_profiles(&self) -> Result<Vec<UserProfile>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserProfileRow> = users::table
            .order((users::created_at.asc(), users::id.asc()))
            .select(UserProfileRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_profile).collect()
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = users::table
            .filter(users::id.eq(id.as_uuid()))
            .select(UserRow::as_select())
            .first::<UserRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_user).transpose()
    }

    async fn save(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let exercises = encode_exercises(user)?;

        let new_row = NewUserRow {
            id: *user.id().as_uuid(),
            username: user.username().as_ref(),
            exercises: &exercises,
        };
        let update_row = UserUpdate {
            username: user.username().as_ref(),
            exercises: &exercises,
        };

        diesel::insert_into(users::table)
            .values(&new_row)
            .on_conflict(users::id)
            .do_update()
            .set(&update_row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
