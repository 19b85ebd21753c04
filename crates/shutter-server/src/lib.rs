//! shutter server library entry.
//!
//! Wires the config loader, metrics registry, processing pipeline, and HTTP
//! surface into one service. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod pipeline;
pub mod process;
pub mod router;
