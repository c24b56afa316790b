//! Template-based digit classification

use super::{MatchConfig, MatchError, TemplateLibrary};
use applegrid_core::Digit;
use image::GrayImage;
use image::imageops::{self, FilterType};
use imageproc::template_matching::{MatchTemplateMethod, find_extremes, match_template};
use log::debug;

/// Classifies a single ROI against the template library using normalized
/// cross-correlation. Pure function of its inputs plus the immutable
/// library; no side effects.
#[derive(Debug, Clone, Copy, Default)]
pub struct DigitMatcher {
    config: MatchConfig,
}

impl DigitMatcher {
    /// Create a matcher with the given configuration
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Classify one region of interest.
    ///
    /// The ROI is resized to the canonical template size, correlated
    /// against every loaded template, and the digit with the strictly
    /// highest peak score wins; exact ties resolve to the smaller digit
    /// because templates are visited in ascending digit order. Returns
    /// `None` when the winning score falls below the acceptance
    /// threshold.
    pub fn classify(
        &self,
        roi: &GrayImage,
        library: &TemplateLibrary,
    ) -> Result<Option<Digit>, MatchError> {
        if library.is_empty() {
            return Err(MatchError::EmptyLibrary);
        }
        let (width, height) = library.canonical_size()?;
        let resized = imageops::resize(roi, width, height, FilterType::Triangle);

        let mut best: Option<(Digit, f32)> = None;
        for (digit, template) in library.iter() {
            // Templates are expected to share the canonical size; one that
            // cannot fit inside the resized ROI cannot be correlated.
            if template.width() > width || template.height() > height {
                debug!(
                    "template for digit {digit} is larger than the canonical size, skipping"
                );
                continue;
            }
            let scores = match_template(
                &resized,
                template,
                MatchTemplateMethod::CrossCorrelationNormalized,
            );
            let score = find_extremes(&scores).max_value;
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((digit, score));
            }
        }

        Ok(best.and_then(|(digit, score)| (score >= self.config.threshold).then_some(digit)))
    }

    /// Acceptance threshold in use
    pub fn threshold(&self) -> f32 {
        self.config.threshold
    }
}
