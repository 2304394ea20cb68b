//! Typed path parameter extractor.

use std::str::FromStr;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use rentalhub_core::error::AppError;

use crate::error::ApiError;

/// A single `{id}` path segment parsed into a typed id.
///
/// Non-numeric ids are rejected as validation errors; digit strings that
/// cannot name a record are reported as not found.
#[derive(Debug, Clone, Copy)]
pub struct IdPath<T>(pub T);

impl<S, T> FromRequestParts<S> for IdPath<T>
where
    S: Send + Sync,
    T: FromStr<Err = AppError> + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;
        Ok(Self(raw.parse()?))
    }
}
