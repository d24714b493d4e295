//! Common types and utilities shared across CLI commands.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use image::RgbaImage;
use tileweave::partition::Strategy;
use tileweave::weave::{self, Variant};

use crate::error::CliError;

/// Compositor selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum CompositeVariant {
    /// Sum mask-weighted layers (overlaps accumulate additively)
    #[default]
    Weighted,
    /// Copy tiles directly (overlapping tiles: last writer wins)
    Mosaic,
}

impl From<CompositeVariant> for Variant {
    fn from(variant: CompositeVariant) -> Self {
        match variant {
            CompositeVariant::Weighted => Variant::Weighted,
            CompositeVariant::Mosaic => Variant::Mosaic,
        }
    }
}

/// Read every input image into memory, in argument order.
pub fn load_images(paths: &[PathBuf]) -> Result<Vec<RgbaImage>, CliError> {
    paths
        .iter()
        .map(|path| tileweave::io::read_image(path).map_err(CliError::from))
        .collect()
}

/// Load inputs, weave them with the given strategy, and write the result.
///
/// A single input is woven against a same-size black background; several
/// inputs round-robin across the generated regions.
pub fn run_weave(
    inputs: &[PathBuf],
    strategy: Strategy,
    variant: CompositeVariant,
    output: &Path,
) -> Result<(), CliError> {
    let frames = load_images(inputs)?;
    let composite = if let [only] = frames.as_slice() {
        weave::single(only, strategy, variant.into(), Some(output))?
    } else {
        let refs: Vec<&RgbaImage> = frames.iter().collect();
        weave::compose_with(&refs, strategy, variant.into(), Some(output))?
    };

    match composite {
        Some(image) => tracing::info!(
            output = %output.display(),
            width = image.width(),
            height = image.height(),
            "composite written"
        ),
        None => tracing::warn!("no input images; nothing was written"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_variant_conversion() {
        assert_eq!(Variant::from(CompositeVariant::Weighted), Variant::Weighted);
        assert_eq!(Variant::from(CompositeVariant::Mosaic), Variant::Mosaic);
    }

    #[test]
    fn test_load_images_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_images(&[dir.path().join("absent.png")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_weave_two_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.png");
        let second = dir.path().join("second.png");
        let output = dir.path().join("woven.png");

        let a = RgbaImage::from_pixel(64, 64, Rgba([250, 0, 0, 255]));
        let b = RgbaImage::from_pixel(64, 64, Rgba([0, 250, 0, 255]));
        tileweave::io::write_image(&first, &a).unwrap();
        tileweave::io::write_image(&second, &b).unwrap();

        run_weave(
            &[first, second],
            Strategy::vertical(32),
            CompositeVariant::Weighted,
            &output,
        )
        .unwrap();

        let woven = tileweave::io::read_image(&output).unwrap();
        assert_eq!(woven.get_pixel(0, 0).0[0], 250);
        assert_eq!(woven.get_pixel(32, 0).0[1], 250);
    }

    #[test]
    fn test_run_weave_single_input_uses_black_background() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.png");
        let output = dir.path().join("woven.png");

        let image = RgbaImage::from_pixel(64, 64, Rgba([100, 100, 100, 255]));
        tileweave::io::write_image(&input, &image).unwrap();

        run_weave(
            &[input],
            Strategy::horizontal(32),
            CompositeVariant::Weighted,
            &output,
        )
        .unwrap();

        let woven = tileweave::io::read_image(&output).unwrap();
        assert_eq!(woven.get_pixel(0, 0).0[0], 100);
        assert_eq!(woven.get_pixel(0, 32).0[0], 0);
    }
}
