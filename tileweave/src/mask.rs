//! Per-pixel weight masks over the image plane.
//!
//! A [`Mask`] records, for every pixel, how many assigned regions cover it.
//! Masks combine by elementwise arithmetic addition, not logical OR: a
//! pixel claimed by two overlapping regions carries weight 2, and the
//! weighted compositor multiplies pixel values by that count. The counts
//! are stored once per pixel and broadcast across the RGBA channel axis.

use image::RgbaImage;
use thiserror::Error;

use crate::geometry::{Region, Resolution};

/// Errors from mask combination.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// The two masks (or a mask and its image) cover different planes.
    #[error("resolution mismatch: expected {expected}, got {actual}")]
    ResolutionMismatch {
        expected: Resolution,
        actual: Resolution,
    },
}

/// Per-pixel accumulation counts congruent to one image plane.
///
/// # Example
///
/// ```
/// use tileweave::geometry::{Region, Resolution};
/// use tileweave::mask::Mask;
///
/// let resolution = Resolution::new(8, 8);
/// let mut mask = Mask::window(resolution, Region::window(0, 4, 0, 4));
/// mask.add(&Mask::window(resolution, Region::window(2, 6, 2, 6))).unwrap();
///
/// assert_eq!(mask.weight_at(0, 0), 1);
/// assert_eq!(mask.weight_at(3, 3), 2); // overlap accumulates
/// assert_eq!(mask.weight_at(7, 7), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    resolution: Resolution,
    weights: Vec<u16>,
}

impl Mask {
    /// All-zero mask: no pixel claimed.
    pub fn empty(resolution: Resolution) -> Self {
        Self {
            resolution,
            weights: vec![0; resolution.pixel_count()],
        }
    }

    /// All-one mask: every pixel claimed once.
    pub fn full(resolution: Resolution) -> Self {
        Self {
            resolution,
            weights: vec![1; resolution.pixel_count()],
        }
    }

    /// Weight 1 inside the rectangle, 0 elsewhere.
    ///
    /// The region is clamped to the resolution first, so out-of-range or
    /// inverted bounds select nothing.
    pub fn window(resolution: Resolution, region: Region) -> Self {
        let mut mask = Self::empty(resolution);
        mask.fill_region(region.clamped(resolution));
        mask
    }

    /// Weight 1 across the full width within rows `y_min..y_max`.
    pub fn horizontal(resolution: Resolution, y_min: u32, y_max: u32) -> Self {
        Self::window(resolution, Region::horizontal_band(resolution, y_min, y_max))
    }

    /// Weight 1 across the full height within columns `x_min..x_max`.
    pub fn vertical(resolution: Resolution, x_min: u32, x_max: u32) -> Self {
        Self::window(resolution, Region::vertical_band(resolution, x_min, x_max))
    }

    /// Weight 1 wherever the image has content.
    ///
    /// A pixel counts as nonzero when any of its channels, alpha included,
    /// is nonzero.
    pub fn from_nonzero(image: &RgbaImage) -> Self {
        let mut mask = Self::empty(Resolution::of(image));
        for (index, pixel) in image.pixels().enumerate() {
            if pixel.0.iter().any(|&channel| channel != 0) {
                mask.weights[index] = 1;
            }
        }
        mask
    }

    /// The plane this mask covers.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Accumulate another mask into this one.
    ///
    /// Addition is elementwise and saturating at `u16::MAX`; overlapping
    /// claims raise the count rather than OR-ing to 1. The accumulated
    /// counts are never renormalized.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::ResolutionMismatch`] when the masks cover
    /// different planes.
    pub fn add(&mut self, other: &Mask) -> Result<(), MaskError> {
        if self.resolution != other.resolution {
            return Err(MaskError::ResolutionMismatch {
                expected: self.resolution,
                actual: other.resolution,
            });
        }
        for (weight, added) in self.weights.iter_mut().zip(&other.weights) {
            *weight = weight.saturating_add(*added);
        }
        Ok(())
    }

    /// The accumulation count at pixel `(x, y)`.
    pub fn weight_at(&self, x: u32, y: u32) -> u16 {
        self.weights[y as usize * self.resolution.width as usize + x as usize]
    }

    /// Row-major per-pixel counts.
    pub(crate) fn weights(&self) -> &[u16] {
        &self.weights
    }

    fn fill_region(&mut self, region: Region) {
        let width = self.resolution.width as usize;
        for y in region.rows() {
            let row = y as usize * width;
            self.weights[row + region.x_min as usize..row + region.x_max as usize].fill(1);
        }
    }
}
