//! Commerce Error Types
//!
//! This module provides commerce-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Commerce-specific result type alias
pub type CommerceResult<T> = Result<T, CommerceError>;

/// Commerce-specific error variants
#[derive(Debug, Error)]
pub enum CommerceError {
    /// No product with the requested id
    #[error("Product not found")]
    ProductNotFound,

    /// No order with the requested id, or the caller may not see it
    #[error("Order not found")]
    OrderNotFound,

    /// The cart has no line for the requested product
    #[error("Item is not in the cart")]
    CartItemNotFound,

    /// An order line references a product id that does not exist
    #[error("Order contains an unknown product")]
    UnknownProduct,

    /// Request payload failed validation
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CommerceError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CommerceError::ProductNotFound
            | CommerceError::OrderNotFound
            | CommerceError::CartItemNotFound => StatusCode::NOT_FOUND,
            CommerceError::UnknownProduct | CommerceError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            CommerceError::Database(_) | CommerceError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CommerceError::ProductNotFound
            | CommerceError::OrderNotFound
            | CommerceError::CartItemNotFound => ErrorKind::NotFound,
            CommerceError::UnknownProduct | CommerceError::Validation(_) => ErrorKind::BadRequest,
            CommerceError::Database(_) | CommerceError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            CommerceError::Database(e) => {
                tracing::error!(error = %e, "Commerce database error");
            }
            CommerceError::Internal(msg) => {
                tracing::error!(message = %msg, "Commerce internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Commerce error");
            }
        }
    }
}

impl IntoResponse for CommerceError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for CommerceError {
    fn from(err: AppError) -> Self {
        CommerceError::Internal(err.to_string())
    }
}
