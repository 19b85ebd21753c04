//! In-process metrics for the server.
//!
//! Metrics are stored as atomics and rendered by the `/metrics` handler in
//! Prometheus text exposition format. `middleware` carries the HTTP tracking
//! layer that feeds the automatic request metrics.

pub mod metrics;
pub mod middleware;
