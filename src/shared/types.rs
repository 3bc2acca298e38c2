use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::core::error::AppError;

/// Uniform error body for every failure status.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode) -> Self {
        Self {
            success: false,
            error: status.as_u16(),
            message: AppError::message_for(status).to_string(),
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Page query parameter for list endpoints.
///
/// Kept as a raw string so that a non-numeric value falls back to the
/// default page instead of rejecting the request, matching the service's
/// historical behavior.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct PageQuery {
    /// Page number (1-indexed, default: 1)
    pub page: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.parse().ok())
            .unwrap_or(1)
    }
}

/// Return the 1-based `page` slice of `entries` with a fixed page size.
///
/// No bounds clamping: a page past the end (or below 1) yields an empty
/// slice. Callers decide whether an empty page is a 404.
pub fn paginate<T>(entries: Vec<T>, page: i64, per_page: usize) -> Vec<T> {
    if page < 1 {
        return Vec::new();
    }
    let start = (page as usize - 1).saturating_mul(per_page);
    entries.into_iter().skip(start).take(per_page).collect()
}

// =============================================================================
// CATEGORY ID TRANSLATION
// =============================================================================

/// API-facing category ids are 0-based; stored ids are 1-based. Every
/// handler that accepts a category id goes through this one conversion.
///
/// Returns `None` when the shifted id does not fit a stored id, so an id
/// outside the storable range can never alias a real category. Callers
/// decide what that means (404 on lookups, 400 on create).
pub fn to_stored_category_id(api_id: i64) -> Option<i32> {
    api_id.checked_add(1).and_then(|id| i32::try_from(id).ok())
}
