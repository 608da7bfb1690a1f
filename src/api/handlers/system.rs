use axum::{extract::State, Json};

use crate::api::error::ApiResult;
use crate::api::server::AppState;
use crate::db::connection::probe_connection;
use crate::models::responses::{ConnectionProbeResponse, HealthResponse};

/// Liveness plus the legal value sets, so clients can populate pickers
/// without a second round trip.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        valid_dieties: state.vocabulary.deities.clone(),
        valid_tempos: state.vocabulary.tempos.clone(),
        valid_offering_statuses: state.vocabulary.offering_statuses.clone(),
    })
}

pub async fn test_connection_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<ConnectionProbeResponse>> {
    let (database, round_trip_ms) = probe_connection(&state.pool).await?;

    Ok(Json(ConnectionProbeResponse {
        status: "ok",
        database,
        round_trip_ms,
    }))
}
