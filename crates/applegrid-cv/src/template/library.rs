//! Reference template loading and lookup

use super::MatchError;
use applegrid_core::Digit;
use image::GrayImage;
use log::{info, warn};
use std::collections::BTreeMap;
use std::path::Path;

/// One reference glyph image per digit value.
///
/// Built once by the caller and passed by shared reference into the
/// extractor and matcher; read-only for the rest of the process. Missing
/// entries are tolerated — an absent digit simply can never be
/// recognized.
#[derive(Debug, Clone, Default)]
pub struct TemplateLibrary {
    templates: BTreeMap<Digit, GrayImage>,
}

impl TemplateLibrary {
    /// Build a library from in-memory digit/image pairs
    pub fn from_templates<I>(templates: I) -> Self
    where
        I: IntoIterator<Item = (Digit, GrayImage)>,
    {
        Self {
            templates: templates.into_iter().collect(),
        }
    }

    /// Load `1.png` through `9.png` from a template directory.
    ///
    /// Each individual load failure is a non-fatal warning; the digit is
    /// left absent from the set.
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        let mut templates = BTreeMap::new();

        for digit in Digit::ALL {
            let path = dir.join(format!("{digit}.png"));
            match image::open(&path) {
                Ok(img) => {
                    templates.insert(digit, img.to_luma8());
                }
                Err(err) => {
                    warn!("digit template {} could not be loaded: {err}", path.display());
                }
            }
        }

        info!(
            "loaded {} of 9 digit templates from {}",
            templates.len(),
            dir.display()
        );
        Self { templates }
    }

    /// Reference image for a digit, if loaded
    pub fn get(&self, digit: Digit) -> Option<&GrayImage> {
        self.templates.get(&digit)
    }

    /// Dimensions every ROI is resized to before matching, defined by
    /// digit 1's template
    pub fn canonical_size(&self) -> Result<(u32, u32), MatchError> {
        self.get(Digit::ALL[0])
            .map(GrayImage::dimensions)
            .ok_or(MatchError::MissingCanonicalTemplate)
    }

    /// Loaded templates in ascending digit order
    pub fn iter(&self) -> impl Iterator<Item = (Digit, &GrayImage)> {
        self.templates.iter().map(|(&digit, image)| (digit, image))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
