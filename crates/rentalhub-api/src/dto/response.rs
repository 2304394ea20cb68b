//! Response DTOs.
//!
//! Records are returned as-is; only the health probe has a dedicated shape.

use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok`; an unreachable store answers 503 instead.
    pub status: String,
    /// Active store backend.
    pub store: String,
    /// Server version.
    pub version: String,
}
