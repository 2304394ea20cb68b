//! Query string extractor and the list endpoints' parameters.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use rentalhub_core::error::AppError;
use rentalhub_core::result::AppResult;
use rentalhub_core::types::{CustomerFilter, SortKey, SortSpec, VideoFilter};
use rentalhub_entity::{CustomerSortKey, OverdueSortKey, VideoSortKey};

use crate::error::ApiError;

/// Query string parameters, rejecting with a validation error.
#[derive(Debug, Clone)]
pub struct ListQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ListQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// `GET /videos` parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoListParams {
    /// Substring the title must contain.
    pub title: Option<String>,
    /// `asc` or `desc`.
    pub sort: Option<String>,
    /// Comma-separated sort fields, `-` prefix for descending.
    pub order_by: Option<String>,
}

impl VideoListParams {
    /// The title filter.
    pub fn filter(&self) -> VideoFilter {
        VideoFilter {
            title: self.title.clone(),
        }
    }

    /// The requested ordering.
    pub fn sort_spec(&self) -> AppResult<SortSpec<VideoSortKey>> {
        sort_spec(&self.sort, &self.order_by)
    }
}

/// `GET /customers` parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerListParams {
    /// Substring the name must contain.
    pub name: Option<String>,
    /// Substring the postal code must contain.
    pub postal_code: Option<String>,
    /// `asc` or `desc`.
    pub sort: Option<String>,
    /// Comma-separated sort fields, `-` prefix for descending.
    pub order_by: Option<String>,
}

impl CustomerListParams {
    /// The name and postal code filters.
    pub fn filter(&self) -> CustomerFilter {
        CustomerFilter {
            name: self.name.clone(),
            postal_code: self.postal_code.clone(),
        }
    }

    /// The requested ordering.
    pub fn sort_spec(&self) -> AppResult<SortSpec<CustomerSortKey>> {
        sort_spec(&self.sort, &self.order_by)
    }
}

/// `GET /rentals/overdue` parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OverdueParams {
    /// Reference instant (RFC 3339); defaults to the server clock.
    pub as_of: Option<String>,
    /// `asc` or `desc`.
    pub sort: Option<String>,
    /// Comma-separated sort fields, `-` prefix for descending.
    pub order_by: Option<String>,
}

impl OverdueParams {
    /// The pinned reference instant, if any.
    pub fn as_of(&self) -> AppResult<Option<DateTime<Utc>>> {
        self.as_of
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(|raw| {
                DateTime::parse_from_rfc3339(raw.trim())
                    .map(|dt| dt.with_timezone(&Utc))
                    .map_err(|_| {
                        AppError::validation(format!(
                            "Invalid as_of '{raw}': expected an RFC 3339 timestamp"
                        ))
                    })
            })
            .transpose()
    }

    /// The requested ordering.
    pub fn sort_spec(&self) -> AppResult<SortSpec<OverdueSortKey>> {
        sort_spec(&self.sort, &self.order_by)
    }
}

fn sort_spec<K: SortKey>(sort: &Option<String>, order_by: &Option<String>) -> AppResult<SortSpec<K>> {
    SortSpec::from_query(sort.as_deref(), order_by.as_deref())
}
