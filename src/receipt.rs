// 🧾 Receipt Model
// Wire shapes for incoming receipts and the scored record kept by the store

use serde::{Deserialize, Serialize};

// ============================================================================
// INCOMING DOCUMENT
// ============================================================================

/// A single purchased line on a receipt
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,

    /// Text-encoded decimal, e.g. "2.25"
    pub price: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Item {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

/// Raw receipt as submitted for processing.
///
/// Every field is required. Nothing here has been checked yet; run it through
/// `validation::validate` before scoring.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomingReceipt {
    pub retailer: String,

    /// YYYY-MM-DD
    pub purchase_date: String,

    /// HH:MM, 24-hour clock
    pub purchase_time: String,

    pub items: Vec<Item>,

    /// Text-encoded decimal, e.g. "35.35"
    pub total: String,
}

// ============================================================================
// STORED RECORD
// ============================================================================

/// The only thing kept after processing: an id and the points it earned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredReceipt {
    id: String,
    points: u64,
}

impl StoredReceipt {
    pub fn new(id: impl Into<String>, points: u64) -> Self {
        StoredReceipt {
            id: id.into(),
            points,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn points(&self) -> u64 {
        self.points
    }
}

// ============================================================================
// RESPONSES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// TESTS
// ============================================================================
