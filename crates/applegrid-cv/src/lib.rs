//! Applegrid Computer Vision Library
//!
//! Board recognition for the apple-box digit puzzle: locates printed digit
//! glyphs in a binarized board capture, classifies them against a small
//! reference template set and reassembles the detections into the fixed
//! board grid from `applegrid-core`.

pub mod extract;
pub mod pipeline;
pub mod region;
pub mod template;

// Re-export commonly used types
pub use extract::{ExtractionConfig, RegionExtractor};
pub use pipeline::{PipelineConfig, RecognitionOutcome, recognize_board};
pub use region::Region;
pub use template::{DigitMatcher, MatchConfig, MatchError, TemplateLibrary};

// Error handling
pub type Result<T> = anyhow::Result<T>;
