//! Assigned-image layers consumed by the compositors.
//!
//! A layer pairs one source image with the regions it contributes to the
//! output. Two variants exist, one per compositor:
//!
//! - [`MaskedImage`] carries a cumulative weight [`Mask`](crate::mask::Mask)
//!   for the additive, mask-weighted compositor.
//! - [`ImageMosaic`] carries an ordered tile list for the direct-copy
//!   compositor; no mask is ever materialized.
//!
//! Layers borrow their source pixels immutably, so the same images can back
//! any number of compositions.

mod masked;
mod mosaic;

pub use masked::MaskedImage;
pub use mosaic::ImageMosaic;
