//! The two composition reductions.
//!
//! Both compositors reduce an ordered sequence of layers to one output
//! buffer:
//!
//! - [`weighted`] sums `mask × image` products into a widened
//!   [`Accumulator`] and clamps once when building the output image.
//!   Addition is commutative, so layer order does not change the result.
//! - [`mosaic`] copies each layer's tiles directly into the output in
//!   sequence order; for overlapping tiles the LAST writer wins, so order
//!   matters and is preserved exactly as supplied.
//!
//! An empty layer list is a defined absence (`Ok(None)`), not an error and
//! not a zero-sized buffer. Mismatched layer resolutions fail fast with
//! [`ComposeError::ResolutionMismatch`] before any pixel is touched.

mod accumulator;
mod error;

pub use accumulator::Accumulator;
pub use error::ComposeError;

use image::RgbaImage;

use crate::geometry::Resolution;
use crate::layer::{ImageMosaic, MaskedImage};

/// Sum all mask-weighted layers into one image.
///
/// # Errors
///
/// Returns [`ComposeError::ResolutionMismatch`] when any layer's plane
/// differs from the first layer's.
pub fn weighted(layers: &[MaskedImage<'_>]) -> Result<Option<RgbaImage>, ComposeError> {
    let Some(first) = layers.first() else {
        return Ok(None);
    };
    let resolution = first.resolution();
    check_congruent(resolution, layers.iter().map(MaskedImage::resolution))?;

    let mut accumulator = Accumulator::zeroed(resolution);
    for layer in layers {
        accumulator.add_weighted(layer.image(), layer.mask());
    }
    tracing::debug!(
        layers = layers.len(),
        resolution = %resolution,
        "composed mask-weighted layers"
    );
    Ok(Some(accumulator.into_image()))
}

/// Copy every layer's tiles into one image, last writer winning.
///
/// # Errors
///
/// Returns [`ComposeError::ResolutionMismatch`] when any layer's plane
/// differs from the first layer's.
pub fn mosaic(layers: &[ImageMosaic<'_>]) -> Result<Option<RgbaImage>, ComposeError> {
    let Some(first) = layers.first() else {
        return Ok(None);
    };
    let resolution = first.resolution();
    check_congruent(resolution, layers.iter().map(ImageMosaic::resolution))?;

    let mut output = RgbaImage::new(resolution.width, resolution.height);
    let mut copied = 0usize;
    for layer in layers {
        for tile in layer.tiles() {
            let tile = tile.clamped(resolution);
            for y in tile.rows() {
                for x in tile.cols() {
                    output.put_pixel(x, y, *layer.image().get_pixel(x, y));
                }
            }
            copied += 1;
        }
    }
    tracing::debug!(
        layers = layers.len(),
        tiles = copied,
        resolution = %resolution,
        "composed tile mosaic"
    );
    Ok(Some(output))
}

fn check_congruent(
    expected: Resolution,
    resolutions: impl Iterator<Item = Resolution>,
) -> Result<(), ComposeError> {
    for (index, actual) in resolutions.enumerate() {
        if actual != expected {
            return Err(ComposeError::ResolutionMismatch {
                index,
                expected,
                actual,
            });
        }
    }
    Ok(())
}
