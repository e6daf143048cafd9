use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::core::error::{AppError, Result};
use crate::shared::constants::QUESTIONS_PER_PAGE;

/// Error body shared by every failure response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Page query parameter for question listings.
///
/// `page` is carried as a raw string so that a malformed value surfaces as the
/// contract's `bad request` body instead of an axum query rejection.
#[derive(Debug, Default, Clone, Deserialize, IntoParams)]
pub struct PageQuery {
    /// Page number (1-indexed, default: 1)
    pub page: Option<String>,
}

impl PageQuery {
    /// Parse the 1-indexed page number, defaulting to 1 when absent.
    pub fn page(&self) -> Result<i64> {
        match self.page.as_deref() {
            None => Ok(1),
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|p| *p >= 1)
                .ok_or_else(|| AppError::BadRequest(format!("invalid page parameter: {raw}"))),
        }
    }

    /// SQL OFFSET for a 1-indexed page at the fixed page size
    pub fn offset(page: i64) -> i64 {
        (page - 1) * QUESTIONS_PER_PAGE
    }
}
