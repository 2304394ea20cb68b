//! Customer entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use rentalhub_core::error::AppError;
use rentalhub_core::types::CustomerId;

/// A store member who can rent videos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Customer {
    /// Unique customer identifier.
    pub id: CustomerId,
    /// Full name.
    pub name: String,
    /// Postal code.
    pub postal_code: String,
    /// Phone number, stored as entered.
    pub phone: String,
}

impl Customer {
    /// The error returned when `id` does not resolve to a customer.
    pub fn not_found(id: CustomerId) -> AppError {
        AppError::not_found(format!("Customer {id} was not found"))
    }

    /// Apply a partial update in place.
    pub fn apply(&mut self, update: &UpdateCustomer) {
        self.name.clone_from(&update.name);
        if let Some(postal_code) = &update.postal_code {
            self.postal_code.clone_from(postal_code);
        }
        if let Some(phone) = &update.phone {
            self.phone.clone_from(phone);
        }
    }
}

/// Data required to register a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    /// Full name.
    pub name: String,
    /// Postal code.
    pub postal_code: String,
    /// Phone number.
    pub phone: String,
}

impl NewCustomer {
    /// Materialize the record under an assigned id.
    pub fn into_customer(self, id: CustomerId) -> Customer {
        Customer {
            id,
            name: self.name,
            postal_code: self.postal_code,
            phone: self.phone,
        }
    }
}

/// Partial update of a customer. The name is always replaced; the other
/// fields only when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCustomer {
    /// New name.
    pub name: String,
    /// New postal code.
    pub postal_code: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
}
