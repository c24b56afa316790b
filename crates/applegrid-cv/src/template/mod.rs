//! Digit template library and matcher

pub mod library;
pub mod matcher;

pub use library::TemplateLibrary;
pub use matcher::DigitMatcher;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fatal template configuration errors.
///
/// Individual missing templates are tolerated (the digit just becomes
/// unrecognizable), but matching cannot run at all without the canonical
/// sizing template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchError {
    /// Digit 1's template defines the canonical ROI size; without it no
    /// region can be normalized for matching.
    #[error("canonical sizing template (digit 1) is not loaded")]
    MissingCanonicalTemplate,
    #[error("template library is empty")]
    EmptyLibrary,
}

/// Digit matching configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Minimum normalized cross-correlation score for a classification
    /// to be accepted
    pub threshold: f32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { threshold: 0.8 }
    }
}
