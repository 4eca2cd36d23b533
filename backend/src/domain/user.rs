//! User aggregate: identity, username and the embedded exercise sequence.

use std::fmt;

use uuid::Uuid;

use crate::domain::Exercise;

/// Validation errors raised while building users.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The identifier was empty.
    #[error("user id must not be empty")]
    EmptyId,
    /// The identifier was not a UUID.
    #[error("user id must be a valid UUID")]
    InvalidId,
    /// The username was missing or blank.
    #[error("username must not be empty")]
    EmptyUsername,
}

/// Opaque user identifier, generated on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(Uuid);

impl UserId {
    /// Parse an identifier supplied by a client.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let raw = id.as_ref();
        if raw.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if raw.trim() != raw {
            return Err(UserValidationError::InvalidId);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Generate a fresh random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap a UUID read back from storage.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-blank username. Uniqueness is not enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Validate and wrap a username, keeping it exactly as supplied.
    pub fn new(username: impl Into<String>) -> Result<Self, UserValidationError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        Ok(Self(username))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

/// Identity projection of a user, without exercises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: UserId,
    pub username: Username,
}

/// A user together with the exercises they logged.
///
/// ## Invariants
/// - Exercises are append-only and keep insertion order.
/// - Every exercise belongs to exactly this user; there is no way to move
///   or remove one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: Username,
    exercises: Vec<Exercise>,
}

impl User {
    /// Start a new user with a freshly generated id and no exercises.
    pub fn register(username: Username) -> Self {
        Self {
            id: UserId::random(),
            username,
            exercises: Vec::new(),
        }
    }

    /// Rebuild an aggregate loaded from storage.
    pub fn restore(id: UserId, username: Username, exercises: Vec<Exercise>) -> Self {
        Self {
            id,
            username,
            exercises,
        }
    }

    /// Stable identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Username as supplied at creation.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Exercises in insertion order.
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    /// Append an exercise to the end of the log.
    pub fn append_exercise(&mut self, exercise: Exercise) {
        self.exercises.push(exercise);
    }

    /// Identity projection.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            username: self.username.clone(),
        }
    }
}
