//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. When a
//! migration changes the schema, regenerate with `diesel print-schema` or
//! update by hand.

diesel::table! {
    /// One document per user.
    ///
    /// The exercise log lives in `exercises` as a JSON array so the whole
    /// aggregate is read and written in a single row.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Username exactly as supplied at creation.
        username -> Text,
        /// Ordered exercise documents.
        exercises -> Jsonb,
        /// Record creation timestamp; drives list ordering.
        created_at -> Timestamptz,
        /// Last modification timestamp (maintained by trigger).
        updated_at -> Timestamptz,
    }
}
