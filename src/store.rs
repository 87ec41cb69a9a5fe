// 💾 Receipt Store
// In-memory id -> points mapping, shared across request handlers

use crate::receipt::StoredReceipt;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use uuid::Uuid;

/// Process-lifetime store of scored receipts.
///
/// Cloning yields another handle to the same map. Records are written once and
/// never updated or removed.
#[derive(Debug, Clone, Default)]
pub struct ReceiptStore {
    receipts: Arc<RwLock<HashMap<String, StoredReceipt>>>,
}

impl ReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `points` under a freshly generated id and return the id
    pub fn insert(&self, points: u64) -> String {
        let mut receipts = self.receipts.write().unwrap_or_else(PoisonError::into_inner);

        // v4 collisions are astronomically unlikely; the loop makes them impossible
        let id = loop {
            let candidate = Uuid::new_v4().to_string();
            if !receipts.contains_key(&candidate) {
                break candidate;
            }
        };

        let receipt = StoredReceipt::new(id, points);
        let id = receipt.id().to_string();
        receipts.insert(id.clone(), receipt);
        id
    }

    /// Points stored under `id`, or `None` if it was never issued
    pub fn lookup(&self, id: &str) -> Option<u64> {
        self.receipts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .map(StoredReceipt::points)
    }

    pub fn len(&self) -> usize {
        self.receipts.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// TESTS
// ============================================================================
