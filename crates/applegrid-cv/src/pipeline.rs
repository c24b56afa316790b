//! Board recognition pipeline
//!
//! Ties the extraction, balance and reconstruction stages together:
//! binarized image -> observations -> balance gate -> fixed grid. The
//! operator confirmation is an injected closure so the pipeline stays
//! unit-testable, and an abort is a typed outcome rather than a process
//! exit.

use crate::Result;
use crate::extract::{ExtractionConfig, RegionExtractor};
use crate::template::TemplateLibrary;
use anyhow::Context;
use applegrid_core::{GateDecision, Grid, GridConfig, check_balance};
use image::GrayImage;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Full pipeline configuration
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub grid: GridConfig,
    pub extraction: ExtractionConfig,
}

/// Result of a recognition run
#[derive(Debug, Clone)]
pub enum RecognitionOutcome {
    /// The fully reconstructed board
    Board(Grid),
    /// The operator declined to continue after a failed balance check;
    /// no grid was constructed.
    Aborted,
}

/// Recognize the board in a binarized capture.
///
/// `ask` is consulted at most once, and only when the balance check
/// fails; its answer decides between continuing and aborting.
pub fn recognize_board(
    image: &GrayImage,
    library: &TemplateLibrary,
    config: &PipelineConfig,
    ask: impl FnOnce() -> String,
) -> Result<RecognitionOutcome> {
    let extractor = RegionExtractor::new(config.extraction);
    let observations = extractor
        .extract(image, library)
        .context("digit extraction failed")?;
    info!("extracted {} digit observations", observations.len());

    let report = check_balance(&observations);
    for condition in &report.conditions {
        if condition.holds() {
            info!(
                "balance: count({}) = {} >= count({}) = {}",
                condition.low, condition.low_count, condition.high, condition.high_count
            );
        } else {
            warn!(
                "balance: count({}) = {} < count({}) = {}",
                condition.low, condition.low_count, condition.high, condition.high_count
            );
        }
    }

    if report.gate(ask) == GateDecision::Abort {
        info!("operator aborted after failed balance check");
        return Ok(RecognitionOutcome::Aborted);
    }

    Ok(RecognitionOutcome::Board(Grid::from_observations(
        &observations,
        config.grid,
    )))
}

/// Export a reconstructed grid as pretty-printed JSON
pub fn export_json(grid: &Grid, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(grid).context("failed to serialize grid")?;
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
