//! Stats report handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::debug;

use crate::{AppError, AppState};
use satsboard_core::models::PaymentStatsSummary;
use satsboard_core::stats::summarize;

/// GET /api/stats - Compute the payment stats report from a fresh snapshot
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PaymentStatsSummary>, AppError> {
    let transactions = state
        .source
        .list_transactions()
        .await
        .map_err(|e| AppError::bad_gateway("Failed to fetch transactions", e.into()))?;

    debug!(count = transactions.len(), "Fetched transaction snapshot");

    let summary = summarize(&transactions, &state.merchants, state.event_start);
    Ok(Json(summary))
}

/// GET /api/merchants - Declared merchant display names, for chart labels
pub async fn list_merchants(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.merchants.merchants().to_vec())
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /api/health - Liveness probe
pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
