//! Digit extraction from a binarized board image

pub mod config;
pub mod extractor;

pub use config::ExtractionConfig;
pub use extractor::RegionExtractor;
