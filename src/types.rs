use serde::{Deserialize, Serialize};

/// Box dimensions in cells of the root (finest) raster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoxSize {
    pub width: usize,
    pub height: usize,
}

impl BoxSize {
    pub const UNIT: BoxSize = BoxSize {
        width: 1,
        height: 1,
    };

    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub const fn square(side: usize) -> Self {
        Self::new(side, side)
    }

    pub fn is_positive(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Box area in root cells, or `None` when it does not fit in `usize`.
    pub fn area(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }

    /// Edge length of the square with the same area; the abscissa of a
    /// box-counting point.
    pub fn side(&self) -> f64 {
        (self.width as f64 * self.height as f64).sqrt()
    }

    /// True when both axes of `self` evenly divide `other`.
    pub fn divides(&self, other: BoxSize) -> bool {
        self.is_positive()
            && other.width % self.width == 0
            && other.height % self.height == 0
    }

    /// Component-wise quotient, if `divisor` evenly divides `self`.
    pub fn checked_div(&self, divisor: BoxSize) -> Option<BoxSize> {
        divisor
            .divides(*self)
            .then(|| BoxSize::new(self.width / divisor.width, self.height / divisor.height))
    }

    /// Component-wise product, or `None` on overflow.
    pub fn scaled(&self, factor: BoxSize) -> Option<BoxSize> {
        Some(BoxSize::new(
            self.width.checked_mul(factor.width)?,
            self.height.checked_mul(factor.height)?,
        ))
    }
}

impl std::fmt::Display for BoxSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// One `(box side, covering count)` sample for dimension fitting.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoveringPoint {
    pub box_side: f64,
    pub count: usize,
}
