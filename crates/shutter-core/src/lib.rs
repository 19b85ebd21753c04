//! shutter core: processing contracts and the shared error surface.
//!
//! This crate defines the collaborator boundary (the `ImageProcessor` trait
//! and its `ProcessingReport`) plus the error type shared by the server and
//! any pipeline implementation. It intentionally carries no runtime or HTTP
//! dependencies so alternative pipelines can implement the contract without
//! pulling in the server stack.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `ShutterError`/`Result` so a single
//! bad request never takes the process down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod processing;

pub use error::{Result, ShutterError};
pub use processing::{ImageProcessor, ProcessingReport};
