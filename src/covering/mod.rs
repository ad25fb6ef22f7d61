//! Immutable covering summaries.
//!
//! A `Covering` records the box size used (in root raster cells) and how many
//! boxes of the covering grid intersect the feature. It never holds the grid.
pub mod error;

pub use self::error::CoveringError;

use crate::types::{BoxSize, CoveringPoint};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Covering {
    width: usize,
    height: usize,
    count: usize,
    grid_cells: usize,
}

impl Covering {
    /// Summarize a covering grid of `grid_cells` boxes, `count` of which are
    /// covered.
    pub fn new(box_size: BoxSize, count: usize, grid_cells: usize) -> Result<Self, CoveringError> {
        if !box_size.is_positive() {
            return Err(CoveringError::invalid(box_size, "box dimensions must be positive"));
        }
        if box_size.area().is_none() {
            return Err(CoveringError::invalid(box_size, "box area overflows usize"));
        }
        if count > grid_cells {
            return Err(CoveringError::invalid(
                box_size,
                "covering count exceeds the number of grid cells",
            ));
        }
        Ok(Self {
            width: box_size.width,
            height: box_size.height,
            count,
            grid_cells,
        })
    }

    /// Box area (width × height).
    pub fn size(&self) -> usize {
        self.width * self.height
    }

    /// Number of covered boxes.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn box_size(&self) -> BoxSize {
        BoxSize::new(self.width, self.height)
    }

    pub fn grid_cells(&self) -> usize {
        self.grid_cells
    }

    pub fn point(&self) -> CoveringPoint {
        CoveringPoint {
            box_side: self.box_size().side(),
            count: self.count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_is_box_area() {
        let c = Covering::new(BoxSize::new(2, 3), 4, 10).unwrap();
        assert_eq!(c.size(), 6);
        assert_eq!(c.count(), 4);
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        let err = Covering::new(BoxSize::new(0, 3), 0, 0).unwrap_err();
        assert!(matches!(err, CoveringError::InvalidArgument { width: 0, height: 3, .. }));
    }

    #[test]
    fn rejects_overflowing_area() {
        let err = Covering::new(BoxSize::square(1usize << 40), 1, 1).unwrap_err();
        assert!(matches!(err, CoveringError::InvalidArgument { .. }));
    }

    #[test]
    fn rejects_count_above_grid_cells() {
        assert!(Covering::new(BoxSize::square(2), 5, 4).is_err());
    }
}
