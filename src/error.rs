// ⚠️ Error taxonomy
// What a request can fail with; transport status codes are decided at the edge

use thiserror::Error;

/// Per-request failures. None of these are fatal to the process.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReceiptError {
    /// Body did not decode, or a field failed validation. Deliberately opaque.
    #[error("The receipt is invalid.")]
    InvalidReceipt,

    /// No receipt was stored under this id
    #[error("No receipt found for that ID.")]
    NotFound(String),
}

/// Bad server configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}")]
    InvalidValue(String),
}

#[cfg(feature = "server")]
mod response {
    use super::ReceiptError;
    use crate::receipt::ErrorResponse;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Json, Response};

    impl ReceiptError {
        pub fn status_code(&self) -> StatusCode {
            match self {
                ReceiptError::InvalidReceipt => StatusCode::BAD_REQUEST,
                ReceiptError::NotFound(_) => StatusCode::NOT_FOUND,
            }
        }
    }

    impl IntoResponse for ReceiptError {
        fn into_response(self) -> Response {
            let body = ErrorResponse {
                error: self.to_string(),
            };
            (self.status_code(), Json(body)).into_response()
        }
    }
}
