//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed `UserRepository` using Diesel ORM.
//! - **memory**: in-process `UserRepository` for tests and local runs.
//!
//! Adapters only translate between domain types and storage representations.

pub mod memory;
pub mod persistence;
