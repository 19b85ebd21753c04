//! HTTP tracking layer feeding the automatic request metrics.

use std::time::Instant;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;

/// Record wall-clock duration and a method/status-labelled count for every
/// request on the routes this layer wraps, success and failure paths alike.
pub async fn track_http(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let method = req.method().to_string();
    let start = Instant::now();

    let response = next.run(req).await;

    let status = response.status().as_u16().to_string();
    let metrics = state.metrics();
    metrics.request_duration.observe(start.elapsed());
    metrics
        .http_requests
        .inc(&[("method", &method), ("status", &status)]);

    response
}
