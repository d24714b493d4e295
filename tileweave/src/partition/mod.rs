//! Partition strategies and round-robin region assignment.
//!
//! A partition call takes a list of source images and a [`Strategy`],
//! generates the strategy's sequence of regions over the shared image
//! plane, and assigns each region to an image in strict round-robin order
//! starting at image 0. There is no state between calls.
//!
//! Strip strategies step along one axis with paired inclusive bounds; when
//! the step does not divide the dimension evenly, the unpaired remainder
//! produces NO region and that border stays with the compositor's zeroed
//! background. The windowed strategy produces a full 2D grid and advances
//! the round-robin counter an extra time at the end of every row band, so
//! a different image leads each row.

mod round_robin;

pub use round_robin::RoundRobin;

use image::RgbaImage;
use thiserror::Error;

use crate::geometry::{Region, Resolution};
use crate::layer::{ImageMosaic, MaskedImage};
use crate::mask::{Mask, MaskError};

/// Default strip step size in pixels.
pub const DEFAULT_SHIFT: u32 = 64;

/// Default row/column step sizes for the windowed strategy.
pub const DEFAULT_WINDOW_SHIFTS: (u32, u32) = (64, 64);

/// How the image plane is partitioned into regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Full-height strips stepping along the column axis.
    Vertical {
        /// Strip width in pixels.
        shift: u32,
    },
    /// Full-width strips stepping along the row axis.
    Horizontal {
        /// Strip height in pixels.
        shift: u32,
    },
    /// A grid of rectangular windows, outer loop over row bands, inner
    /// loop over column bands.
    Windowed {
        /// Window height in pixels.
        shift_y: u32,
        /// Window width in pixels.
        shift_x: u32,
    },
}

impl Strategy {
    /// Vertical strips of the given width.
    pub fn vertical(shift: u32) -> Self {
        Self::Vertical { shift }
    }

    /// Horizontal strips of the given height.
    pub fn horizontal(shift: u32) -> Self {
        Self::Horizontal { shift }
    }

    /// Windows with the given row and column steps.
    pub fn windowed(shift_y: u32, shift_x: u32) -> Self {
        Self::Windowed { shift_y, shift_x }
    }

    fn has_zero_shift(&self) -> bool {
        match *self {
            Self::Vertical { shift } | Self::Horizontal { shift } => shift == 0,
            Self::Windowed { shift_y, shift_x } => shift_y == 0 || shift_x == 0,
        }
    }
}

/// Errors from partitioning.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PartitionError {
    /// A step size of zero cannot generate any bounded region.
    #[error("step size must be nonzero")]
    ZeroShift,

    /// An image's plane differs from the first image's.
    #[error("image {index} resolution mismatch: expected {expected}, got {actual}")]
    ResolutionMismatch {
        index: usize,
        expected: Resolution,
        actual: Resolution,
    },

    /// Mask accumulation failed while assigning a region.
    #[error(transparent)]
    Mask(#[from] MaskError),
}

/// Full-height strips along the column axis: `[0, shift)`, `[shift,
/// 2*shift)`, ... up to the plane width. A trailing partial strip is
/// dropped. A zero shift yields no strips.
pub fn vertical_spans(resolution: Resolution, shift: u32) -> Vec<Region> {
    if shift == 0 {
        return Vec::new();
    }
    spans(resolution.width, shift)
        .map(|(low, high)| Region::vertical_band(resolution, low, high))
        .collect()
}

/// Full-width strips along the row axis; same stepping as
/// [`vertical_spans`].
pub fn horizontal_spans(resolution: Resolution, shift: u32) -> Vec<Region> {
    if shift == 0 {
        return Vec::new();
    }
    spans(resolution.height, shift)
        .map(|(low, high)| Region::horizontal_band(resolution, low, high))
        .collect()
}

/// The windowed strategy's grid, one inner `Vec` per row band.
///
/// Trailing partial bands are dropped on both axes. A zero shift on
/// either axis yields an empty grid.
pub fn window_grid(resolution: Resolution, shift_y: u32, shift_x: u32) -> Vec<Vec<Region>> {
    if shift_y == 0 || shift_x == 0 {
        return Vec::new();
    }
    spans(resolution.height, shift_y)
        .map(|(y_min, y_max)| {
            spans(resolution.width, shift_x)
                .map(|(x_min, x_max)| Region::window(y_min, y_max, x_min, x_max))
                .collect()
        })
        .collect()
}

/// Partition the plane and assign each region's mask to an image,
/// round-robin.
///
/// Returns one [`MaskedImage`] per source image, in input order, with the
/// cumulative mask of every region assigned to it. An empty image list
/// produces an empty layer list.
///
/// # Errors
///
/// [`PartitionError::ZeroShift`] for a zero step size, or
/// [`PartitionError::ResolutionMismatch`] when the images do not share one
/// resolution.
pub fn masked_layers<'a>(
    images: &[&'a RgbaImage],
    strategy: Strategy,
) -> Result<Vec<MaskedImage<'a>>, PartitionError> {
    let Some(resolution) = validate(images, strategy)? else {
        return Ok(Vec::new());
    };

    let mut layers: Vec<MaskedImage<'a>> =
        images.iter().copied().map(MaskedImage::new).collect();
    let regions = assign(resolution, strategy, layers.len(), |index, region| {
        layers[index]
            .add_mask(&Mask::window(resolution, region))
            .map_err(PartitionError::from)
    })?;

    tracing::debug!(
        images = images.len(),
        regions,
        strategy = ?strategy,
        resolution = %resolution,
        "assigned region masks round-robin"
    );
    Ok(layers)
}

/// Partition the plane and assign each region as a tile to an image,
/// round-robin.
///
/// Same assignment order as [`masked_layers`], but regions append to each
/// image's tile list and no mask is materialized.
///
/// # Errors
///
/// Same conditions as [`masked_layers`].
pub fn mosaic_layers<'a>(
    images: &[&'a RgbaImage],
    strategy: Strategy,
) -> Result<Vec<ImageMosaic<'a>>, PartitionError> {
    let Some(resolution) = validate(images, strategy)? else {
        return Ok(Vec::new());
    };

    let mut layers: Vec<ImageMosaic<'a>> =
        images.iter().copied().map(ImageMosaic::new).collect();
    let regions = assign(resolution, strategy, layers.len(), |index, region| {
        layers[index].add_tile(region);
        Ok(())
    })?;

    tracing::debug!(
        images = images.len(),
        regions,
        strategy = ?strategy,
        resolution = %resolution,
        "assigned tiles round-robin"
    );
    Ok(layers)
}

/// Paired stepping over one axis: lows from 0 and highs from `shift`, both
/// inclusive of `length`, zipped so an unpaired remainder drops out.
/// Callers guarantee a nonzero shift.
fn spans(length: u32, shift: u32) -> impl Iterator<Item = (u32, u32)> {
    debug_assert!(shift > 0);
    let step = shift as usize;
    let lows = (0..=length).step_by(step);
    let highs = (shift..=length).step_by(step);
    lows.zip(highs)
}

/// Drive one strategy, handing each generated region and its round-robin
/// slot to `assign_region`. Returns the number of regions generated.
fn assign(
    resolution: Resolution,
    strategy: Strategy,
    image_count: usize,
    mut assign_region: impl FnMut(usize, Region) -> Result<(), PartitionError>,
) -> Result<usize, PartitionError> {
    let mut order = RoundRobin::new(image_count);
    let mut regions = 0usize;
    match strategy {
        Strategy::Vertical { shift } => {
            for region in vertical_spans(resolution, shift) {
                assign_region(order.next(), region)?;
                regions += 1;
            }
        }
        Strategy::Horizontal { shift } => {
            for region in horizontal_spans(resolution, shift) {
                assign_region(order.next(), region)?;
                regions += 1;
            }
        }
        Strategy::Windowed { shift_y, shift_x } => {
            for row in window_grid(resolution, shift_y, shift_x) {
                for region in row {
                    assign_region(order.next(), region)?;
                    regions += 1;
                }
                // extra increment per completed row: the next row leads
                // with a different image
                order.advance();
            }
        }
    }
    Ok(regions)
}

fn validate(
    images: &[&RgbaImage],
    strategy: Strategy,
) -> Result<Option<Resolution>, PartitionError> {
    if strategy.has_zero_shift() {
        return Err(PartitionError::ZeroShift);
    }
    let Some(first) = images.first() else {
        return Ok(None);
    };
    let expected = Resolution::of(first);
    for (index, image) in images.iter().enumerate() {
        let actual = Resolution::of(image);
        if actual != expected {
            return Err(PartitionError::ResolutionMismatch {
                index,
                expected,
                actual,
            });
        }
    }
    Ok(Some(expected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(width: u32, height: u32, value: u8) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([value, value, value, 255]))
    }

    #[test]
    fn test_vertical_spans_exact_division() {
        let regions = vertical_spans(Resolution::new(512, 512), 64);
        assert_eq!(regions.len(), 8);
        for (i, region) in regions.iter().enumerate() {
            assert_eq!(region.x_min, i as u32 * 64);
            assert_eq!(region.x_max, (i as u32 + 1) * 64);
            assert_eq!(region.y_min, 0);
            assert_eq!(region.y_max, 512);
        }
    }

    #[test]
    fn test_vertical_spans_drop_trailing_partial() {
        let regions = vertical_spans(Resolution::new(100, 50), 64);
        assert_eq!(regions.len(), 1);
        assert_eq!((regions[0].x_min, regions[0].x_max), (0, 64));
    }

    #[test]
    fn test_vertical_spans_shift_larger_than_width() {
        let regions = vertical_spans(Resolution::new(50, 50), 64);
        assert!(regions.is_empty());
    }

    #[test]
    fn test_vertical_spans_zero_shift_empty() {
        assert!(vertical_spans(Resolution::new(64, 64), 0).is_empty());
    }

    #[test]
    fn test_horizontal_spans_step_rows() {
        let regions = horizontal_spans(Resolution::new(32, 96), 32);
        assert_eq!(regions.len(), 3);
        assert_eq!((regions[1].y_min, regions[1].y_max), (32, 64));
        assert_eq!((regions[1].x_min, regions[1].x_max), (0, 32));
    }

    #[test]
    fn test_window_grid_shape() {
        let grid = window_grid(Resolution::new(256, 128), 64, 64);
        assert_eq!(grid.len(), 2);
        for row in &grid {
            assert_eq!(row.len(), 4);
        }
        assert_eq!(grid[1][2], Region::window(64, 128, 128, 192));
    }

    #[test]
    fn test_window_grid_drops_partials_both_axes() {
        let grid = window_grid(Resolution::new(100, 70), 64, 64);
        assert_eq!(grid.len(), 1);
        assert_eq!(grid[0].len(), 1);
        assert_eq!(grid[0][0], Region::window(0, 64, 0, 64));
    }

    #[test]
    fn test_masked_layers_empty_images() {
        let layers = masked_layers(&[], Strategy::vertical(64)).unwrap();
        assert!(layers.is_empty());
    }

    #[test]
    fn test_masked_layers_zero_shift_rejected() {
        let image = solid(64, 64, 1);
        let err = masked_layers(&[&image], Strategy::vertical(0)).unwrap_err();
        assert_eq!(err, PartitionError::ZeroShift);

        let err = masked_layers(&[&image], Strategy::windowed(64, 0)).unwrap_err();
        assert_eq!(err, PartitionError::ZeroShift);
    }

    #[test]
    fn test_masked_layers_resolution_mismatch() {
        let a = solid(64, 64, 1);
        let b = solid(32, 64, 1);
        let err = masked_layers(&[&a, &b], Strategy::vertical(16)).unwrap_err();
        assert_eq!(
            err,
            PartitionError::ResolutionMismatch {
                index: 1,
                expected: Resolution::new(64, 64),
                actual: Resolution::new(32, 64),
            }
        );
    }

    #[test]
    fn test_masked_layers_round_robin_strips() {
        let a = solid(256, 8, 1);
        let b = solid(256, 8, 2);
        let layers = masked_layers(&[&a, &b], Strategy::vertical(64)).unwrap();

        // 4 strips over 2 images: a gets strips 0 and 2, b gets 1 and 3
        assert_eq!(layers[0].mask().weight_at(0, 0), 1);
        assert_eq!(layers[0].mask().weight_at(64, 0), 0);
        assert_eq!(layers[0].mask().weight_at(128, 0), 1);
        assert_eq!(layers[1].mask().weight_at(64, 0), 1);
        assert_eq!(layers[1].mask().weight_at(192, 0), 1);
        assert_eq!(layers[1].mask().weight_at(0, 0), 0);
    }

    #[test]
    fn test_masked_layers_round_robin_counts() {
        // 8 strips over 3 images: counts 3, 3, 2
        let images: Vec<RgbaImage> = (0..3).map(|v| solid(512, 4, v as u8)).collect();
        let refs: Vec<&RgbaImage> = images.iter().collect();
        let layers = masked_layers(&refs, Strategy::vertical(64)).unwrap();

        let strip_count = |layer: &MaskedImage<'_>| {
            (0..8)
                .filter(|strip| layer.mask().weight_at(strip * 64, 0) > 0)
                .count()
        };
        assert_eq!(strip_count(&layers[0]), 3);
        assert_eq!(strip_count(&layers[1]), 3);
        assert_eq!(strip_count(&layers[2]), 2);
    }

    #[test]
    fn test_windowed_checkerboard_pattern() {
        let a = solid(512, 512, 1);
        let b = solid(512, 512, 2);
        let layers = masked_layers(&[&a, &b], Strategy::windowed(64, 64)).unwrap();

        // 8 tiles per row plus the row-boundary increment: tile (row, col)
        // lands on image (row + col) % 2
        for row in 0..8u32 {
            for col in 0..8u32 {
                let owner = ((row + col) % 2) as usize;
                let x = col * 64 + 32;
                let y = row * 64 + 32;
                assert_eq!(layers[owner].mask().weight_at(x, y), 1);
                assert_eq!(layers[1 - owner].mask().weight_at(x, y), 0);
            }
        }
    }

    #[test]
    fn test_mosaic_layers_tiles_in_generation_order() {
        let a = solid(256, 8, 1);
        let b = solid(256, 8, 2);
        let layers = mosaic_layers(&[&a, &b], Strategy::vertical(64)).unwrap();

        assert_eq!(
            layers[0].tiles(),
            &[
                Region::vertical_band(Resolution::new(256, 8), 0, 64),
                Region::vertical_band(Resolution::new(256, 8), 128, 192),
            ]
        );
        assert_eq!(
            layers[1].tiles(),
            &[
                Region::vertical_band(Resolution::new(256, 8), 64, 128),
                Region::vertical_band(Resolution::new(256, 8), 192, 256),
            ]
        );
    }

    #[test]
    fn test_mosaic_layers_windowed_extra_increment() {
        let a = solid(128, 128, 1);
        let b = solid(128, 128, 2);
        let layers = mosaic_layers(&[&a, &b], Strategy::windowed(64, 64)).unwrap();

        // 2×2 grid: row 0 -> a, b; row 1 leads with b after the skip
        assert_eq!(layers[0].tiles().len(), 2);
        assert_eq!(layers[1].tiles().len(), 2);
        assert_eq!(layers[0].tiles()[0], Region::window(0, 64, 0, 64));
        assert_eq!(layers[1].tiles()[0], Region::window(0, 64, 64, 128));
        assert_eq!(layers[1].tiles()[1], Region::window(64, 128, 0, 64));
        assert_eq!(layers[0].tiles()[1], Region::window(64, 128, 64, 128));
    }

    #[test]
    fn test_single_image_receives_all_strips() {
        let image = solid(256, 8, 5);
        let layers = masked_layers(&[&image], Strategy::vertical(64)).unwrap();
        assert_eq!(layers.len(), 1);
        for strip in 0..4u32 {
            assert_eq!(layers[0].mask().weight_at(strip * 64, 0), 1);
        }
    }

    // Property-based tests using proptest
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_dividing_strips_cover_axis_once(
                shift in 1u32..=16,
                strips in 1u32..=8,
                height in 1u32..=16,
            ) {
                let resolution = Resolution::new(shift * strips, height);
                let regions = vertical_spans(resolution, shift);
                prop_assert_eq!(regions.len() as u32, strips);

                // every column covered exactly once
                let mut coverage = vec![0u32; resolution.width as usize];
                for region in &regions {
                    for x in region.cols() {
                        coverage[x as usize] += 1;
                    }
                }
                prop_assert!(coverage.iter().all(|&count| count == 1));
            }

            #[test]
            fn test_round_robin_count_law(
                regions in 1usize..=64,
                images in 1usize..=8,
            ) {
                let mut order = RoundRobin::new(images);
                let mut counts = vec![0usize; images];
                for _ in 0..regions {
                    counts[order.next()] += 1;
                }
                for (i, &count) in counts.iter().enumerate() {
                    // image i receives ceil((K - i) / N) regions
                    prop_assert_eq!(count, (regions + images - 1 - i) / images);
                }
            }

            #[test]
            fn test_strip_masks_partition_plane(
                shift in 1u32..=8,
                strips in 1u32..=6,
                images in 1usize..=4,
                height in 1u32..=8,
            ) {
                let width = shift * strips;
                let sources: Vec<RgbaImage> =
                    (0..images).map(|v| solid(width, height, v as u8)).collect();
                let refs: Vec<&RgbaImage> = sources.iter().collect();
                let layers = masked_layers(&refs, super::Strategy::vertical(shift)).unwrap();

                // across all layers, each pixel is claimed exactly once
                for x in 0..width {
                    for y in 0..height {
                        let total: u16 = layers
                            .iter()
                            .map(|layer| layer.mask().weight_at(x, y))
                            .sum();
                        prop_assert_eq!(total, 1);
                    }
                }
            }
        }
    }
}
