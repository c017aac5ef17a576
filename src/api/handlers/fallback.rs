//! Handler for unmatched routes.

use crate::error::AppError;

/// Answers every unknown route with 404 `{"error": "Endpoint not found"}`.
pub async fn not_found_handler() -> AppError {
    AppError::not_found("Endpoint not found")
}
