//! Extraction configuration

use crate::template::MatchConfig;
use serde::{Deserialize, Serialize};

/// Region extraction configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// A candidate box is kept only if both its width and height strictly
    /// exceed this many pixels (speck and seam rejection)
    pub min_region_size: u32,
    /// A fully visible board yields at least this many observations;
    /// fewer triggers a diagnostic warning
    pub expected_observations: usize,
    pub match_config: MatchConfig,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            // A printed digit on the reference capture is larger than one
            // apple-tile icon; anything at or below this is noise.
            min_region_size: 10,
            // Full 10x17 board.
            expected_observations: 170,
            match_config: MatchConfig::default(),
        }
    }
}
