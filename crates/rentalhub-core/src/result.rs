//! Convenience result type alias for RentalHub.

use crate::error::AppError;

/// A specialized `Result` type for RentalHub operations.
pub type AppResult<T> = Result<T, AppError>;
