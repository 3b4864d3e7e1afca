use crate::services::health_service::HealthService;
use axum::body::Body;
use axum::http::Request;
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

pub mod health;
pub mod schemas;

#[derive(Clone, Debug)]
pub struct AppState {
    pub health_service: HealthService,
}

/// Configures and returns the application router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::report))
        .route("/livez", get(health::livez))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    tracing::info_span!(
                        "request",
                        "http.request.method" = %request.method(),
                        "url.path" = %request.uri().path(),
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>, latency: std::time::Duration, _span: &tracing::Span| {
                        tracing::info!(
                            latency_ms = %latency.as_millis(),
                            status = %response.status().as_u16(),
                            "request completed"
                        );
                    },
                ),
        )
        .with_state(state)
}
