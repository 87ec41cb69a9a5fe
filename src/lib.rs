// Receipt Points - Core Library
// Exposes all modules for use in the API server and tests

pub mod receipt;
pub mod money;
pub mod validation;
pub mod rules;
pub mod store;
pub mod error;
pub mod config;

#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use receipt::{
    IncomingReceipt, Item, StoredReceipt,
    ProcessResponse, PointsResponse, ErrorResponse,
};
pub use money::Cents;
pub use validation::{validate, validate_detailed, Pattern, ValidationFailure};
pub use rules::{calculate_points, PointsBreakdown, RuleEngine, ScoringRule};
pub use store::ReceiptStore;
pub use error::{ConfigError, ReceiptError};
pub use config::ServerConfig;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Validate, then score. The whole `process` path minus storage.
pub fn score_receipt(receipt: &IncomingReceipt) -> Result<u64, ReceiptError> {
    if !validate(receipt) {
        return Err(ReceiptError::InvalidReceipt);
    }
    Ok(calculate_points(receipt))
}
