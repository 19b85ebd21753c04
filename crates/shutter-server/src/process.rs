//! `GET /` — resolve an image path, delegate to the processor, record phase
//! timings, and return a JSON timing summary.

use std::path::Path;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use shutter_core::processing::round4;
use shutter_core::{ProcessingReport, Result, ShutterError};

use crate::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProcessQuery {
    pub image_path: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TimingSummary {
    pub total_time: f64,
    pub load_time: f64,
    pub processing_time: f64,
    pub files_generated: usize,
    pub breakdown: Breakdown,
}

#[derive(Debug, Serialize)]
pub struct Breakdown {
    pub load_percentage: f64,
    pub processing_percentage: f64,
}

pub async fn process_image(
    State(state): State<AppState>,
    Query(query): Query<ProcessQuery>,
) -> Response {
    let image_path = query
        .image_path
        .unwrap_or_else(|| state.cfg().server.default_image.clone());

    match run(&state, &image_path).await {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(ShutterError::ImageNotFound(path)) => (
            StatusCode::NOT_FOUND,
            format!("Error: Image not found at {path}"),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(image_path = %image_path, error = %e, "image processing failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error processing image: {e}"),
            )
                .into_response()
        }
    }
}

async fn run(state: &AppState, image_path: &str) -> Result<TimingSummary> {
    let path = Path::new(image_path);

    // Existence check comes before delegation and before any observation.
    if !path.exists() {
        return Err(ShutterError::ImageNotFound(image_path.to_string()));
    }

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| ShutterError::BadRequest(format!("no file name in path: {image_path}")))?;

    let report = state.processor().process(file_name, path).await?;

    let metrics = state.metrics();
    metrics.image_load.observe_secs(report.load_secs);
    metrics.image_processing.observe_secs(report.process_secs);

    Ok(summarize(&report))
}

fn summarize(report: &ProcessingReport) -> TimingSummary {
    let (load_percentage, processing_percentage) = report.breakdown();
    TimingSummary {
        total_time: round4(report.total_secs),
        load_time: round4(report.load_secs),
        processing_time: round4(report.process_secs),
        files_generated: report.outputs.len(),
        breakdown: Breakdown {
            load_percentage,
            processing_percentage,
        },
    }
}
