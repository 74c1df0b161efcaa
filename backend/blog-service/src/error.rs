//! Error types for the blog service
//!
//! Every resolver failure is converted into a field-level GraphQL error with
//! a machine-readable `code` extension. Absent lookups and dangling
//! references are not errors; they resolve to null.

use async_graphql::ErrorExtensions;

/// Result type for blog-service operations
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed identifier argument
    #[error("invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    /// The document store cannot be reached
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// Defect safety net (serialization failures and the like)
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn code(&self) -> &'static str {
        match self {
            AppError::InvalidIdentifier(_) => "INVALID_IDENTIFIER",
            AppError::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            AppError::Internal(_) => "INTERNAL",
        }
    }
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        if let AppError::Internal(msg) = self {
            tracing::error!(error = %msg, "internal resolver error");
        }
        async_graphql::Error::new(self.to_string())
            .extend_with(|_, e| e.set("code", self.code()))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::StoreUnavailable(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for AppError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
