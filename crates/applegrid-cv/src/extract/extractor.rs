//! Connected-component region extraction

use super::ExtractionConfig;
use crate::Result;
use crate::region::Region;
use crate::template::{DigitMatcher, TemplateLibrary};
use anyhow::Context;
use applegrid_core::DigitObservation;
use image::GrayImage;
use imageproc::contours::find_contours;
use log::warn;

/// Finds candidate glyph boxes in a binarized image and classifies each
/// surviving box against the template library.
#[derive(Debug, Clone, Copy)]
pub struct RegionExtractor {
    config: ExtractionConfig,
    matcher: DigitMatcher,
}

impl RegionExtractor {
    /// Create an extractor with the given configuration
    pub fn new(config: ExtractionConfig) -> Self {
        Self {
            config,
            matcher: DigitMatcher::new(config.match_config),
        }
    }

    /// Extract digit observations from a binarized board image.
    ///
    /// Every connected foreground component becomes a candidate box.
    /// Boxes failing the strict minimum-size test are dropped as noise,
    /// the rest are cropped and classified; only recognized digits become
    /// observations. A suspiciously low observation count is logged as a
    /// warning (likely occlusion, wrong resolution or stale templates)
    /// without aborting the pass.
    pub fn extract(
        &self,
        image: &GrayImage,
        library: &TemplateLibrary,
    ) -> Result<Vec<DigitObservation>> {
        let contours = find_contours::<u32>(image);
        let mut observations = Vec::new();

        for contour in &contours {
            let Some(region) = Region::from_points(&contour.points) else {
                continue;
            };
            if !region.exceeds_min_size(self.config.min_region_size) {
                continue;
            }

            let roi = region.crop(image);
            let digit = self
                .matcher
                .classify(&roi, library)
                .with_context(|| format!("classifying region at ({}, {})", region.x, region.y))?;

            if let Some(digit) = digit {
                observations.push(DigitObservation::new(digit, region.x, region.y));
            }
        }

        if observations.len() < self.config.expected_observations {
            warn!(
                "extracted only {} digit observations (expected at least {})",
                observations.len(),
                self.config.expected_observations
            );
        }

        Ok(observations)
    }
}

impl Default for RegionExtractor {
    fn default() -> Self {
        Self::new(ExtractionConfig::default())
    }
}
