//! TileWeave - strip and window image compositing
//!
//! This library composites multiple images into one output image by
//! partitioning the image plane into regions and assigning each region to
//! one source image in round-robin order.
//!
//! # Architecture
//!
//! ```text
//! Partitioner ──► AssignedImages ──► Compositor ──► output buffer
//! (Strategy)      (MaskedImage /     (weighted /    (optional write)
//!                  ImageMosaic)       mosaic)
//! ```
//!
//! Three partition strategies exist: vertical strips, horizontal strips,
//! and a rectangular window grid. Two compositors consume the assigned
//! layers: a mask-weighted sum in which overlapping claims accumulate
//! additively, and a direct tile copy in which the last writer wins.
//!
//! # Example
//!
//! ```
//! use image::RgbaImage;
//! use tileweave::partition::Strategy;
//! use tileweave::weave::{self, Variant};
//!
//! let sunset = RgbaImage::from_pixel(256, 256, image::Rgba([200, 90, 30, 255]));
//! let ocean = RgbaImage::from_pixel(256, 256, image::Rgba([10, 60, 120, 255]));
//!
//! let woven = weave::compose_with(
//!     &[&sunset, &ocean],
//!     Strategy::windowed(64, 64),
//!     Variant::Weighted,
//!     None,
//! )
//! .unwrap()
//! .expect("two images always produce a composite");
//! assert_eq!(woven.width(), 256);
//! ```

pub mod compose;
pub mod geometry;
pub mod io;
pub mod layer;
pub mod mask;
pub mod partition;
pub mod weave;

pub use compose::{Accumulator, ComposeError};
pub use geometry::{Region, Resolution};
pub use io::IoError;
pub use layer::{ImageMosaic, MaskedImage};
pub use mask::{Mask, MaskError};
pub use partition::{PartitionError, RoundRobin, Strategy, DEFAULT_SHIFT, DEFAULT_WINDOW_SHIFTS};
pub use weave::{Variant, WeaveError};
