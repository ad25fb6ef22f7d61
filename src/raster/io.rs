//! I/O helpers for feature masks and JSON reports.
//!
//! - `open_luma`: read a PNG/JPEG/etc. as 8-bit luminance.
//! - `load_mask_image`: `open_luma` thresholded into a `BinaryGrid`.
//! - `save_binary_grid`: write a covering grid to a PNG (covered = white).
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{BinaryGrid, GridView};
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk as 8-bit luminance.
pub fn open_luma(path: &Path) -> Result<GrayImage, String> {
    image::open(path)
        .map(|img| img.into_luma8())
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))
}

/// Load an image from disk and mark every pixel at or above `threshold` as
/// covered.
pub fn load_mask_image(path: &Path, threshold: u8) -> Result<BinaryGrid, String> {
    Ok(grid_from_luma(&open_luma(path)?, threshold))
}

/// Threshold an 8-bit luminance image into a presence grid.
pub fn grid_from_luma(img: &GrayImage, threshold: u8) -> BinaryGrid {
    let (w, h) = (img.width() as usize, img.height() as usize);
    let mut out = BinaryGrid::new(w, h);
    for (x, y, px) in img.enumerate_pixels() {
        out.set(x as usize, y as usize, u8::from(px[0] >= threshold));
    }
    out
}

/// Save a presence grid to a grayscale PNG.
pub fn save_binary_grid(grid: &BinaryGrid, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(grid.w as u32, grid.h as u32);
    for (y, row) in grid.rows().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            let px = if v != 0 { 255 } else { 0 };
            out.put_pixel(x as u32, y as u32, Luma([px]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luminance_threshold_is_inclusive() {
        let img = GrayImage::from_raw(3, 1, vec![10, 128, 200]).unwrap();
        let grid = grid_from_luma(&img, 128);
        assert_eq!(grid.to_rows(), vec![vec![0, 1, 1]]);
    }

    #[test]
    fn mask_round_trips_through_png() {
        let dir = std::env::temp_dir().join(format!("box_counting_io_{}", std::process::id()));
        let path = dir.join("mask.png");
        let grid = BinaryGrid::from_rows(&[[1u8, 0, 0], [0, 1, 1]]).unwrap();
        save_binary_grid(&grid, &path).unwrap();

        let luma = open_luma(&path).unwrap();
        assert_eq!(luma.dimensions(), (3, 2));
        assert_eq!(load_mask_image(&path, 128).unwrap(), grid);

        let missing = dir.join("missing.png");
        let err = open_luma(&missing).unwrap_err();
        assert!(err.contains("missing.png"), "unexpected message: {err}");
        assert!(load_mask_image(&missing, 128).is_err());

        let _ = fs::remove_dir_all(&dir);
    }
}
