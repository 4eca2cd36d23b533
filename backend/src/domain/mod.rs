//! Domain primitives, aggregates and services.
//!
//! Purpose: define the user aggregate with its embedded exercise log, the
//! transport-agnostic error type, and the services implementing the driving
//! ports. Nothing here knows about HTTP or PostgreSQL.
//!
//! Public surface:
//! - Error / ErrorCode: domain failures, mapped to responses by the HTTP
//!   adapter.
//! - User / UserId / Username / UserProfile: the aggregate and its identity.
//! - Exercise / Description / DurationMinutes: one logged activity.
//! - LogFilter: the pure `from`/`to`/`limit` selection over a log.
//! - UserService / ExerciseService / ExerciseLogService: port implementations.

pub mod calendar;
pub mod error;
pub mod exercise;
pub mod exercise_log_service;
pub mod exercise_service;
pub mod log_filter;
pub mod ports;
pub mod trace_id;
pub mod user;
mod user_lookup;
pub mod user_service;

pub use self::calendar::{format_calendar_date, parse_calendar_date};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::exercise::{Description, DurationMinutes, Exercise, ExerciseValidationError};
pub use self::exercise_log_service::ExerciseLogService;
pub use self::exercise_service::ExerciseService;
pub use self::log_filter::{LogFilter, LogFilterError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserId, UserProfile, UserValidationError, Username};
pub use self::user_service::UserService;
