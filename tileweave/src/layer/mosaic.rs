//! The tile-copy layer variant.

use image::RgbaImage;

use crate::geometry::{Region, Resolution};

/// One source image plus the ordered list of tiles it copies into the
/// output.
///
/// Tiles append in assignment order and are never deduplicated or merged;
/// when tiles of different layers overlap, the compositor's iteration order
/// decides the winner. Every mosaic owns a freshly allocated tile list, so
/// instances never share tiles.
///
/// # Example
///
/// ```
/// use image::RgbaImage;
/// use tileweave::geometry::Region;
/// use tileweave::layer::ImageMosaic;
///
/// let image = RgbaImage::new(16, 16);
/// let mut layer = ImageMosaic::new(&image);
/// layer.add_tiles([Region::window(0, 8, 0, 8), Region::window(8, 16, 8, 16)]);
/// assert_eq!(layer.tiles().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ImageMosaic<'a> {
    image: &'a RgbaImage,
    tiles: Vec<Region>,
}

impl<'a> ImageMosaic<'a> {
    /// Wrap an image with an empty tile list.
    pub fn new(image: &'a RgbaImage) -> Self {
        Self {
            image,
            tiles: Vec::new(),
        }
    }

    /// Append one tile.
    pub fn add_tile(&mut self, tile: Region) {
        self.tiles.push(tile);
    }

    /// Append tiles, preserving their order.
    pub fn add_tiles(&mut self, tiles: impl IntoIterator<Item = Region>) {
        self.tiles.extend(tiles);
    }

    /// The source pixels.
    pub fn image(&self) -> &'a RgbaImage {
        self.image
    }

    /// Tiles in assignment order.
    pub fn tiles(&self) -> &[Region] {
        &self.tiles
    }

    /// The source image's plane.
    pub fn resolution(&self) -> Resolution {
        Resolution::of(self.image)
    }
}
