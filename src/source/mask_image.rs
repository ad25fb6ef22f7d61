//! Raster source backed by an image mask.
//!
//! Each resolution resamples the full-resolution mask with nearest-neighbour
//! sampling, so a cell is covered when the pixel nearest its centre is. This
//! differs from the all-touched aggregation used by the feature tree.
use super::{RasterSource, SourceError};
use crate::raster::io::{grid_from_luma, open_luma};
use crate::raster::BinaryGrid;
use image::imageops::{self, FilterType};
use image::GrayImage;
use std::path::Path;

#[derive(Clone, Debug)]
pub struct MaskImageSource {
    image: GrayImage,
    threshold: u8,
}

impl MaskImageSource {
    pub fn new(image: GrayImage, threshold: u8) -> Self {
        Self { image, threshold }
    }

    /// Load a mask from disk; pixels with luminance `>= threshold` are covered.
    pub fn open(path: &Path, threshold: u8) -> Result<Self, String> {
        Ok(Self::new(open_luma(path)?, threshold))
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

impl RasterSource for MaskImageSource {
    fn rasterize(&self, resolution: f64) -> Result<BinaryGrid, SourceError> {
        let (w, h) = self.image.dimensions();
        if w == 0 || h == 0 {
            return Err(SourceError::EmptyRaster { resolution });
        }
        let nw = (f64::from(w) / resolution).ceil().max(1.0) as u32;
        let nh = (f64::from(h) / resolution).ceil().max(1.0) as u32;
        if (nw, nh) == (w, h) {
            return Ok(grid_from_luma(&self.image, self.threshold));
        }
        let resampled = imageops::resize(&self.image, nw, nh, FilterType::Nearest);
        Ok(grid_from_luma(&resampled, self.threshold))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn native_resolution_keeps_every_pixel() {
        let mut img = GrayImage::new(6, 4);
        img.put_pixel(1, 1, Luma([255]));
        img.put_pixel(5, 3, Luma([200]));
        let source = MaskImageSource::new(img, 128);
        let grid = source.rasterize(1.0).unwrap();
        assert_eq!((grid.w, grid.h), (6, 4));
        assert_eq!(grid.covered_cells(), 2);
    }

    #[test]
    fn coarser_resolution_shrinks_grid() {
        let img = GrayImage::from_pixel(10, 7, Luma([255]));
        let source = MaskImageSource::new(img, 128);
        let grid = source.rasterize(3.0).unwrap();
        assert_eq!((grid.w, grid.h), (4, 3));
        assert_eq!(grid.covered_cells(), 12);
    }

    #[test]
    fn opens_masks_through_shared_loader() {
        let dir = std::env::temp_dir().join(format!("box_counting_src_{}", std::process::id()));
        let path = dir.join("mask.png");
        let mut img = GrayImage::new(4, 2);
        img.put_pixel(3, 1, Luma([255]));
        std::fs::create_dir_all(&dir).unwrap();
        img.save(&path).unwrap();

        let source = MaskImageSource::open(&path, 128).unwrap();
        assert_eq!((source.width(), source.height()), (4, 2));
        assert_eq!(source.rasterize(1.0).unwrap().covered_cells(), 1);

        let err = MaskImageSource::open(&dir.join("absent.png"), 128).unwrap_err();
        assert!(err.starts_with("Failed to open"), "unexpected message: {err}");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn empty_image_is_an_error() {
        let source = MaskImageSource::new(GrayImage::new(0, 0), 1);
        assert!(matches!(
            source.rasterize(1.0),
            Err(SourceError::EmptyRaster { .. })
        ));
    }
}
