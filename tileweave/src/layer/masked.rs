//! The mask-weighted layer variant.

use image::RgbaImage;

use crate::compose::Accumulator;
use crate::geometry::Resolution;
use crate::mask::{Mask, MaskError};

/// One source image plus the cumulative weight mask of every region
/// assigned to it.
///
/// The mask starts all-zero and grows by addition as the partitioner
/// assigns regions; regions assigned twice genuinely double their pixels.
/// The image itself is a shared immutable borrow and is never mutated.
///
/// # Example
///
/// ```
/// use image::RgbaImage;
/// use tileweave::layer::MaskedImage;
/// use tileweave::mask::Mask;
///
/// let image = RgbaImage::new(16, 16);
/// let mut layer = MaskedImage::new(&image);
/// layer.add_mask(&Mask::vertical(layer.resolution(), 0, 8)).unwrap();
/// assert_eq!(layer.mask().weight_at(0, 0), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MaskedImage<'a> {
    image: &'a RgbaImage,
    mask: Mask,
}

impl<'a> MaskedImage<'a> {
    /// Wrap an image with an all-zero mask: no region claimed yet.
    pub fn new(image: &'a RgbaImage) -> Self {
        Self {
            image,
            mask: Mask::empty(Resolution::of(image)),
        }
    }

    /// Wrap an image with an initial mask.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::ResolutionMismatch`] when the mask does not
    /// cover the image's plane.
    pub fn with_mask(image: &'a RgbaImage, mask: Mask) -> Result<Self, MaskError> {
        let expected = Resolution::of(image);
        if mask.resolution() != expected {
            return Err(MaskError::ResolutionMismatch {
                expected,
                actual: mask.resolution(),
            });
        }
        Ok(Self { image, mask })
    }

    /// Accumulate a mask into this layer's cumulative mask.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::ResolutionMismatch`] when the mask covers a
    /// different plane.
    pub fn add_mask(&mut self, mask: &Mask) -> Result<(), MaskError> {
        self.mask.add(mask)
    }

    /// The weighted `mask × image` product, widened so that accumulated
    /// weights cannot wrap.
    pub fn apply_mask(&self) -> Accumulator {
        let mut accumulator = Accumulator::zeroed(self.resolution());
        accumulator.add_weighted(self.image, &self.mask);
        accumulator
    }

    /// The source pixels.
    pub fn image(&self) -> &'a RgbaImage {
        self.image
    }

    /// The cumulative mask.
    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    /// The plane shared by image and mask.
    pub fn resolution(&self) -> Resolution {
        Resolution::of(self.image)
    }
}
