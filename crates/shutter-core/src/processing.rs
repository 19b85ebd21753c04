//! Collaborator boundary: the processing trait and its timing report.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::Result;

/// Timing report produced by an image-processing collaborator for one
/// request. Not persisted; its lifecycle is scoped to the request.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingReport {
    /// Total wall-clock of the collaborator call, seconds.
    pub total_secs: f64,
    /// Time spent loading the image from disk, seconds.
    pub load_secs: f64,
    /// Time spent in the processing phase, seconds.
    pub process_secs: f64,
    /// Artifacts written by the collaborator.
    pub outputs: Vec<PathBuf>,
}

impl ProcessingReport {
    /// Load/processing share of the total wall-clock, each rounded to one
    /// decimal place. A non-positive total reports `(0.0, 0.0)` instead of
    /// dividing by zero.
    pub fn breakdown(&self) -> (f64, f64) {
        if self.total_secs <= 0.0 {
            return (0.0, 0.0);
        }
        (
            round1(self.load_secs / self.total_secs * 100.0),
            round1(self.process_secs / self.total_secs * 100.0),
        )
    }
}

/// Round to one decimal place (percentages).
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Round to four decimal places (top-level timing fields).
pub fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

/// An image-processing collaborator.
///
/// Implementations load the image at `image_path`, run their pipeline, and
/// report phase timings plus the artifacts they wrote. Errors for
/// unreadable or corrupt inputs surface as `ShutterError::Processing`.
#[async_trait]
pub trait ImageProcessor: Send + Sync {
    async fn process(&self, file_name: &str, image_path: &Path) -> Result<ProcessingReport>;
}
