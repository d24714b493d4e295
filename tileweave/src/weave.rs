//! One-call composition shortcuts.
//!
//! Each shortcut partitions, composes, and optionally persists in a single
//! call. The `single_*` functions weave one image against a same-size black
//! background; the `multiple_*` functions round-robin a list of images.
//! Both families use the mask-weighted compositor; [`compose_with`] exposes
//! the full choice of [`Strategy`] and [`Variant`].

use std::path::Path;

use image::RgbaImage;
use thiserror::Error;

use crate::compose::{self, ComposeError};
use crate::io::{self, IoError};
use crate::partition::{self, PartitionError, Strategy};

/// Errors from a shortcut composition.
#[derive(Debug, Error)]
pub enum WeaveError {
    /// Partitioning rejected the inputs.
    #[error(transparent)]
    Partition(#[from] PartitionError),

    /// Composition rejected the layers.
    #[error(transparent)]
    Compose(#[from] ComposeError),

    /// Reading or writing an image file failed.
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Which compositor reduces the assigned layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Sum mask-weighted layers; overlaps accumulate additively.
    #[default]
    Weighted,
    /// Copy tiles directly; overlapping tiles resolve to the last writer.
    Mosaic,
}

/// Partition `images` with `strategy`, compose with `variant`, and write
/// the result to `output` when a path is given.
///
/// Returns `Ok(None)` for an empty image list; nothing is written in that
/// case.
///
/// # Errors
///
/// Any [`PartitionError`], [`ComposeError`], or [`IoError`] from the
/// underlying steps.
pub fn compose_with(
    images: &[&RgbaImage],
    strategy: Strategy,
    variant: Variant,
    output: Option<&Path>,
) -> Result<Option<RgbaImage>, WeaveError> {
    let composite = match variant {
        Variant::Weighted => compose::weighted(&partition::masked_layers(images, strategy)?)?,
        Variant::Mosaic => compose::mosaic(&partition::mosaic_layers(images, strategy)?)?,
    };
    if let (Some(path), Some(image)) = (output, composite.as_ref()) {
        io::write_image(path, image)?;
    }
    Ok(composite)
}

/// Weave one image against a same-size black background.
pub fn single(
    image: &RgbaImage,
    strategy: Strategy,
    variant: Variant,
    output: Option<&Path>,
) -> Result<Option<RgbaImage>, WeaveError> {
    let background = RgbaImage::new(image.width(), image.height());
    compose_with(&[image, &background], strategy, variant, output)
}

/// One image as vertical strips alternating with black.
pub fn single_vertical(
    image: &RgbaImage,
    shift: u32,
    output: Option<&Path>,
) -> Result<Option<RgbaImage>, WeaveError> {
    single(image, Strategy::vertical(shift), Variant::Weighted, output)
}

/// One image as horizontal strips alternating with black.
pub fn single_horizontal(
    image: &RgbaImage,
    shift: u32,
    output: Option<&Path>,
) -> Result<Option<RgbaImage>, WeaveError> {
    single(image, Strategy::horizontal(shift), Variant::Weighted, output)
}

/// One image as a window grid alternating with black.
pub fn single_windowed(
    image: &RgbaImage,
    shifts: (u32, u32),
    output: Option<&Path>,
) -> Result<Option<RgbaImage>, WeaveError> {
    single(
        image,
        Strategy::windowed(shifts.0, shifts.1),
        Variant::Weighted,
        output,
    )
}

/// Several images as round-robin vertical strips.
pub fn multiple_vertical(
    images: &[&RgbaImage],
    shift: u32,
    output: Option<&Path>,
) -> Result<Option<RgbaImage>, WeaveError> {
    compose_with(images, Strategy::vertical(shift), Variant::Weighted, output)
}

/// Several images as round-robin horizontal strips.
pub fn multiple_horizontal(
    images: &[&RgbaImage],
    shift: u32,
    output: Option<&Path>,
) -> Result<Option<RgbaImage>, WeaveError> {
    compose_with(images, Strategy::horizontal(shift), Variant::Weighted, output)
}

/// Several images as a round-robin window grid.
pub fn multiple_windowed(
    images: &[&RgbaImage],
    shifts: (u32, u32),
    output: Option<&Path>,
) -> Result<Option<RgbaImage>, WeaveError> {
    compose_with(
        images,
        Strategy::windowed(shifts.0, shifts.1),
        Variant::Weighted,
        output,
    )
}
