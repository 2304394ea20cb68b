//! Rental policy configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Longest loan period accepted, about ten years.
pub const MAX_LOAN_PERIOD_DAYS: u32 = 3650;

/// Rental policy settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentalConfig {
    /// Days between checkout and the rental's due date, `1..=3650`.
    #[serde(default = "default_loan_period_days")]
    pub loan_period_days: u32,
}

impl RentalConfig {
    /// The loan period as a duration.
    pub fn loan_period(&self) -> chrono::Duration {
        chrono::Duration::days(i64::from(self.loan_period_days))
    }

    /// Reject loan periods that are empty or would push due dates out of
    /// range.
    pub fn validate(&self) -> Result<(), AppError> {
        if (1..=MAX_LOAN_PERIOD_DAYS).contains(&self.loan_period_days) {
            Ok(())
        } else {
            Err(AppError::configuration(format!(
                "rentals.loan_period_days must be between 1 and {MAX_LOAN_PERIOD_DAYS}, got {}",
                self.loan_period_days
            )))
        }
    }
}

impl Default for RentalConfig {
    fn default() -> Self {
        Self {
            loan_period_days: default_loan_period_days(),
        }
    }
}

fn default_loan_period_days() -> u32 {
    7
}
