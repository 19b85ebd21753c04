//! Built-in local image processor.
//!
//! Minimal filesystem collaborator behind the `ImageProcessor` seam: reads
//! the image bytes (load phase), folds a checksum over them and writes one
//! processed artifact (processing phase). A real pipeline replaces this
//! without touching the handler; tests inject mocks through the same seam.

use std::path::{Path, PathBuf};
use std::time::Instant;

use async_trait::async_trait;

use shutter_core::{ImageProcessor, ProcessingReport, Result, ShutterError};

pub struct LocalProcessor {
    output_dir: PathBuf,
}

impl LocalProcessor {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }
}

#[async_trait]
impl ImageProcessor for LocalProcessor {
    async fn process(&self, file_name: &str, image_path: &Path) -> Result<ProcessingReport> {
        let start = Instant::now();

        let bytes = tokio::fs::read(image_path)
            .await
            .map_err(|e| ShutterError::Processing(format!("read {}: {e}", image_path.display())))?;
        let load_secs = start.elapsed().as_secs_f64();

        let work = Instant::now();
        let checksum = bytes
            .iter()
            .fold(0u64, |acc, &b| acc.wrapping_mul(31).wrapping_add(b as u64));

        tokio::fs::create_dir_all(&self.output_dir).await.map_err(|e| {
            ShutterError::Processing(format!("create {}: {e}", self.output_dir.display()))
        })?;
        let out_path = self.output_dir.join(format!("processed_{file_name}"));
        tokio::fs::write(&out_path, &bytes)
            .await
            .map_err(|e| ShutterError::Processing(format!("write {}: {e}", out_path.display())))?;
        let process_secs = work.elapsed().as_secs_f64();

        tracing::debug!(file = %file_name, checksum, size = bytes.len(), "image processed");

        Ok(ProcessingReport {
            total_secs: start.elapsed().as_secs_f64(),
            load_secs,
            process_secs,
            outputs: vec![out_path],
        })
    }
}
