//! Loosely typed request fields shared by the inbound HTTP adapters.
//!
//! Bodies arrive either as JSON or as `application/x-www-form-urlencoded`.
//! Form values are always text, while JSON clients may send numbers, so each
//! field is captured as a [`FieldValue`] and flattened to text before the
//! domain coerces it.

use std::fmt;

use actix_web::web;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A scalar body field as sent by the client.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// Flatten an optional field to text.
pub(crate) fn field_text(value: Option<FieldValue>) -> Option<String> {
    value.map(|value| match value {
        FieldValue::Text(text) => text,
        other => other.to_string(),
    })
}

/// Flatten an optional field, treating blank text as absent.
pub(crate) fn optional_field_text(value: Option<FieldValue>) -> Option<String> {
    field_text(value).filter(|text| !text.trim().is_empty())
}

/// Body accepted as JSON or as a urlencoded form.
pub type JsonOrForm<T> = web::Either<web::Json<T>, web::Form<T>>;

/// Unwrap whichever body representation matched.
pub(crate) fn into_body<T>(payload: JsonOrForm<T>) -> T {
    match payload {
        web::Either::Left(json) => json.into_inner(),
        web::Either::Right(form) => form.into_inner(),
    }
}
