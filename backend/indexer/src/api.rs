//! Axum REST API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::error;

use crate::db;
use crate::errors::IndexerError;
use crate::events::EventRecord;

const DEFAULT_LIMIT: i64 = 100;
const MAX_LIMIT: i64 = 1_000;

#[derive(Clone)]
pub struct ApiState {
    pub pool: SqlitePool,
}

// ─────────────────────────────────────────────────────────
// Request / response shapes
// ─────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct EventsQuery {
    /// Restrict to one stored event type, e.g. `participated`.
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub limit: Option<i64>,
}

#[derive(Serialize)]
pub struct ContractEventsResponse {
    pub contract_id: String,
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct AllEventsResponse {
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Debug, Serialize)]
pub struct WinnerResponse {
    pub lottery_id: String,
    pub winner: Option<String>,
    pub prize: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub tx_hash: Option<String>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorResponse { error: message })).into_response()
}

fn internal_error(e: IndexerError) -> Response {
    error!("API query failed: {e}");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

// ─────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /events?type=<event_type>&limit=<n>`
///
/// Indexed events across every followed contract, oldest first.
pub async fn get_all_events(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<EventsQuery>,
) -> Response {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    match db::get_all_events(&state.pool, query.event_type.as_deref(), limit).await {
        Ok(events) => {
            let count = events.len();
            (StatusCode::OK, Json(AllEventsResponse { count, events })).into_response()
        }
        Err(e) => internal_error(e),
    }
}

/// `GET /contracts/:id/events`
///
/// Every indexed event emitted by one contract.
pub async fn get_contract_events(
    State(state): State<Arc<ApiState>>,
    Path(contract_id): Path<String>,
) -> Response {
    match db::get_events_for_contract(&state.pool, &contract_id).await {
        Ok(events) => {
            let count = events.len();
            (
                StatusCode::OK,
                Json(ContractEventsResponse {
                    contract_id,
                    count,
                    events,
                }),
            )
                .into_response()
        }
        Err(e) => internal_error(e),
    }
}

/// `GET /lotteries/:id/winner`
///
/// The draw result of a lottery; `404` until its `winner` event is indexed.
pub async fn get_lottery_winner(
    State(state): State<Arc<ApiState>>,
    Path(lottery_id): Path<String>,
) -> Response {
    match db::get_winner(&state.pool, &lottery_id).await {
        Ok(Some(record)) => (
            StatusCode::OK,
            Json(WinnerResponse {
                lottery_id,
                winner: record.actor.or(record.subject),
                prize: record.amount,
                ledger: record.ledger,
                timestamp: record.timestamp,
                tx_hash: record.tx_hash,
            }),
        )
            .into_response(),
        Ok(None) => error_response(
            StatusCode::NOT_FOUND,
            format!("no winner indexed for lottery {lottery_id}"),
        ),
        Err(e) => internal_error(e),
    }
}
