//! Candidate glyph regions
//!
//! A region is the axis-aligned bounding box of one connected foreground
//! component, produced and consumed within a single extraction pass.

use image::GrayImage;
use image::imageops;
use imageproc::point::Point;
use serde::Serialize;

/// Axis-aligned bounding box of a candidate glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    /// Create a new region
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Bounding box of a contour's boundary points, or `None` for an
    /// empty contour
    pub fn from_points(points: &[Point<u32>]) -> Option<Self> {
        let first = points.first()?;
        let (mut x_min, mut x_max) = (first.x, first.x);
        let (mut y_min, mut y_max) = (first.y, first.y);
        for p in points {
            x_min = x_min.min(p.x);
            x_max = x_max.max(p.x);
            y_min = y_min.min(p.y);
            y_max = y_max.max(p.y);
        }
        Some(Self::new(x_min, y_min, x_max - x_min + 1, y_max - y_min + 1))
    }

    /// Noise filter: both dimensions must strictly exceed the minimum
    pub fn exceeds_min_size(&self, min_size: u32) -> bool {
        self.width > min_size && self.height > min_size
    }

    /// Crop this region out of the source image
    pub fn crop(&self, image: &GrayImage) -> GrayImage {
        imageops::crop_imm(image, self.x, self.y, self.width, self.height).to_image()
    }
}
