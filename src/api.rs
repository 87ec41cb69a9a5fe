// 🌐 REST API with Axum
// Thin transport layer: decode -> validate -> score -> store, and lookups

use crate::error::ReceiptError;
use crate::receipt::{IncomingReceipt, PointsResponse, ProcessResponse};
use crate::rules::RuleEngine;
use crate::store::ReceiptStore;
use crate::validation::validate_detailed;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    store: ReceiptStore,
    engine: Arc<RuleEngine>,
}

impl AppState {
    pub fn new(store: ReceiptStore) -> Self {
        AppState {
            store,
            engine: Arc::new(RuleEngine::new()),
        }
    }

    pub fn store(&self) -> &ReceiptStore {
        &self.store
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ReceiptStore::new())
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    receipts: usize,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /health - Health check
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        receipts: state.store.len(),
    })
}

/// POST /receipts/process - Score a receipt and remember its points
async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<IncomingReceipt>, JsonRejection>,
) -> Result<impl IntoResponse, ReceiptError> {
    let Json(receipt) = payload.map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "Rejected receipt: body did not decode");
        ReceiptError::InvalidReceipt
    })?;

    if let Err(failure) = validate_detailed(&receipt) {
        warn!(%failure, "Rejected receipt: validation failed");
        return Err(ReceiptError::InvalidReceipt);
    }

    let breakdown = state.engine.breakdown(&receipt);
    debug!(retailer = %receipt.retailer, breakdown = %breakdown.summary(), "Scored receipt");

    let points = breakdown.total();
    let id = state.store.insert(points);
    info!(%id, points, "Stored receipt");

    Ok((StatusCode::CREATED, Json(ProcessResponse { id })))
}

/// GET /receipts/:id/points - Points awarded to a processed receipt
async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ReceiptError> {
    match state.store.lookup(&id) {
        Some(points) => Ok(Json(PointsResponse { points })),
        None => {
            warn!(%id, "Points requested for unknown receipt");
            Err(ReceiptError::NotFound(id))
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id/points", get(get_points))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
