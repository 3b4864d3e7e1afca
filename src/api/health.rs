use crate::api::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

/// Liveness probe: returns 200 OK as long as the server is running.
pub async fn livez() -> impl IntoResponse {
    StatusCode::OK
}

/// The aggregated health report.
///
/// Always responds 200 with a top-level `status` of "OK", even when
/// sub-checks fail; callers inspect the individual fields.
pub async fn report(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.health_service.collect().await)
}
