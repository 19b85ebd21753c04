//! shutter server binary.
//!
//! - `GET /`        : process an image, return a timing summary as JSON
//! - `GET /metrics` : Prometheus exposition
//! - `GET /healthz` : liveness

use std::net::SocketAddr;

use tracing_subscriber::{fmt, EnvFilter};

use shutter_server::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg_path = std::env::var("SHUTTER_CONFIG").unwrap_or_else(|_| "shutter.yaml".into());
    let cfg = config::load_from_file(&cfg_path).expect("config load failed");
    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .expect("server.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state);

    tracing::info!(%listen, "shutter-server starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
