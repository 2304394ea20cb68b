//! Request DTOs with validation.
//!
//! Every body field is optional at the serde level so that a missing field
//! surfaces as `Request body must include <field>.` instead of a generic
//! deserialization failure.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use rentalhub_core::error::AppError;
use rentalhub_core::result::AppResult;
use rentalhub_core::types::{CustomerId, VideoId};
use rentalhub_entity::{NewCustomer, NewVideo, UpdateCustomer, UpdateVideo};

/// Create video request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVideoRequest {
    /// Title.
    pub title: Option<String>,
    /// Release date (`YYYY-MM-DD`).
    pub release_date: Option<NaiveDate>,
    /// Copies owned.
    #[validate(range(min = 0, message = "total_inventory must be zero or greater"))]
    pub total_inventory: Option<i32>,
}

impl CreateVideoRequest {
    /// Checks presence of every field and converts to the entity input.
    pub fn into_new_video(self) -> AppResult<NewVideo> {
        Ok(NewVideo {
            title: required(self.title, "title")?,
            release_date: required(self.release_date, "release_date")?,
            total_inventory: required(self.total_inventory, "total_inventory")?,
        })
    }
}

/// Update video request. Only `title` is mandatory.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateVideoRequest {
    /// Title.
    pub title: Option<String>,
    /// Release date.
    pub release_date: Option<NaiveDate>,
    /// Copies owned.
    #[validate(range(min = 0, message = "total_inventory must be zero or greater"))]
    pub total_inventory: Option<i32>,
}

impl UpdateVideoRequest {
    /// Converts to the entity update.
    pub fn into_update(self) -> AppResult<UpdateVideo> {
        Ok(UpdateVideo {
            title: required(self.title, "title")?,
            release_date: self.release_date,
            total_inventory: self.total_inventory,
        })
    }
}

/// Create customer request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    /// Full name.
    pub name: Option<String>,
    /// Postal code.
    pub postal_code: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
}

impl CreateCustomerRequest {
    /// Checks presence of every field and converts to the entity input.
    pub fn into_new_customer(self) -> AppResult<NewCustomer> {
        Ok(NewCustomer {
            name: required(self.name, "name")?,
            postal_code: required(self.postal_code, "postal_code")?,
            phone: required(self.phone, "phone")?,
        })
    }
}

/// Update customer request. Only `name` is mandatory.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCustomerRequest {
    /// Full name.
    pub name: Option<String>,
    /// Postal code.
    pub postal_code: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
}

impl UpdateCustomerRequest {
    /// Converts to the entity update.
    pub fn into_update(self) -> AppResult<UpdateCustomer> {
        Ok(UpdateCustomer {
            name: required(self.name, "name")?,
            postal_code: self.postal_code,
            phone: self.phone,
        })
    }
}

/// Body of `POST /rentals/check-out` and `POST /rentals/check-in`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RentalRequest {
    /// Customer renting or returning.
    pub customer_id: Option<CustomerId>,
    /// Video rented or returned.
    pub video_id: Option<VideoId>,
}

impl RentalRequest {
    /// Both ids, in `(customer_id, video_id)` order.
    pub fn ids(self) -> AppResult<(CustomerId, VideoId)> {
        Ok((
            required(self.customer_id, "customer_id")?,
            required(self.video_id, "video_id")?,
        ))
    }
}

fn required<T>(value: Option<T>, field: &str) -> AppResult<T> {
    value.ok_or_else(|| AppError::validation(format!("Request body must include {field}.")))
}
