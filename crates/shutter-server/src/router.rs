//! Axum router wiring.
//!
//! `/` carries the HTTP tracking layer; `/metrics` and `/healthz` are
//! registered after it so they stay out of the request metrics.

use axum::{middleware, routing::get, Router};

use crate::{app_state::AppState, obs, ops, process};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(process::process_image))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            obs::middleware::track_http,
        ))
        .route("/metrics", get(ops::metrics))
        .route("/healthz", get(ops::healthz))
        .with_state(state)
}
