//! Recognized digit observations

use super::digit::Digit;
use serde::Serialize;

/// A recognized digit together with the top-left pixel position of its
/// bounding box in the source image. Immutable once created; collections
/// of observations carry no inherent ordering beyond image-scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DigitObservation {
    pub digit: Digit,
    pub x: u32,
    pub y: u32,
}

impl DigitObservation {
    /// Create a new observation
    pub fn new(digit: Digit, x: u32, y: u32) -> Self {
        Self { digit, x, y }
    }
}
