//! Image file reading and writing.
//!
//! Thin boundary around the `image` codec crate. Decoding normalizes every
//! input to RGBA so grayscale and RGB files can join the same composition;
//! encoding picks the format from the output extension. Failures carry the
//! offending path and the codec error, and are never retried.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use thiserror::Error;

/// Errors from the image I/O boundary.
#[derive(Debug, Error)]
pub enum IoError {
    /// The file could not be opened or decoded.
    #[error("failed to read image {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The file could not be encoded or written.
    #[error("failed to write image {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Decode an image file into an RGBA pixel buffer.
///
/// # Errors
///
/// Returns [`IoError::Read`] when the file is missing or not a decodable
/// raster format.
pub fn read_image(path: impl AsRef<Path>) -> Result<RgbaImage, IoError> {
    let path = path.as_ref();
    let image = image::open(path)
        .map_err(|source| IoError::Read {
            path: path.to_path_buf(),
            source,
        })?
        .into_rgba8();
    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "read image"
    );
    Ok(image)
}

/// Encode an RGBA pixel buffer to a file, format chosen by extension.
///
/// # Errors
///
/// Returns [`IoError::Write`] when the path is unwritable or the extension
/// names a format that cannot hold RGBA data.
pub fn write_image(path: impl AsRef<Path>, image: &RgbaImage) -> Result<(), IoError> {
    let path = path.as_ref();
    image.save(path).map_err(|source| IoError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "wrote image"
    );
    Ok(())
}
