//! Shared application state.
//!
//! Holds the config, the process-wide metrics registry, and the injected
//! image processor. Cloning is cheap (`Arc` inner); the registry is created
//! once here and lives for the process lifetime.

use std::path::PathBuf;
use std::sync::Arc;

use shutter_core::ImageProcessor;

use crate::config::ServiceConfig;
use crate::obs::metrics::ServiceMetrics;
use crate::pipeline::LocalProcessor;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServiceConfig,
    metrics: ServiceMetrics,
    processor: Arc<dyn ImageProcessor>,
}

impl AppState {
    /// Build application state with the built-in local processor.
    pub fn new(cfg: ServiceConfig) -> Self {
        let processor = Arc::new(LocalProcessor::new(PathBuf::from(&cfg.server.output_dir)));
        Self::with_processor(cfg, processor)
    }

    /// Build application state around a custom processor (used by tests and
    /// embedders that bring their own pipeline).
    pub fn with_processor(cfg: ServiceConfig, processor: Arc<dyn ImageProcessor>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                metrics: ServiceMetrics::default(),
                processor,
            }),
        }
    }

    pub fn cfg(&self) -> &ServiceConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> &ServiceMetrics {
        &self.inner.metrics
    }

    pub fn processor(&self) -> Arc<dyn ImageProcessor> {
        Arc::clone(&self.inner.processor)
    }
}
