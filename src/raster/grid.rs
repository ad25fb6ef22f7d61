//! Owned single-channel grid in row-major layout (stride == width).
//!
//! `BinaryGrid` holds feature presence (0 = absent). `SumGrid` holds exact
//! per-block cell sums produced while aggregating a covering.
use super::traits::{GridView, GridViewMut};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    /// Grid width in cells
    pub w: usize,
    /// Grid height in cells
    pub h: usize,
    /// Number of elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<T>,
}

/// Presence/absence raster. Values are not required to be 0/1.
pub type BinaryGrid = Grid<u8>;

/// Block sums of a `BinaryGrid`, one cell per box.
pub type SumGrid = Grid<u64>;

impl<T: Copy + Default> Grid<T> {
    /// Construct a zero-initialized grid of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![T::default(); w * h],
        }
    }

    /// Wrap an existing row-major buffer. Returns `None` when the length does
    /// not match `w × h`.
    pub fn from_vec(w: usize, h: usize, data: Vec<T>) -> Option<Self> {
        (data.len() == w * h).then_some(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    /// Build from nested rows. All rows must share the same length.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Option<Self> {
        let h = rows.len();
        let w = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(w * h);
        for row in rows {
            let row = row.as_ref();
            if row.len() != w {
                return None;
            }
            data.extend_from_slice(row);
        }
        Self::from_vec(w, h, data)
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[self.idx(x, y)]
    }
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: T) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Copy into a larger `w × h` grid, filling the new right columns and
    /// bottom rows with `T::default()`.
    pub fn padded_to(&self, w: usize, h: usize) -> Self {
        assert!(
            w >= self.w && h >= self.h,
            "padding cannot shrink a {}x{} grid to {w}x{h}",
            self.w,
            self.h
        );
        if w == self.w && h == self.h {
            return self.clone();
        }
        let mut out = Self::new(w, h);
        for y in 0..self.h {
            out.row_mut(y)[..self.w].copy_from_slice(self.row(y));
        }
        out
    }

    /// Nested rows, mostly useful for assertions.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(<[T]>::to_vec).collect()
    }
}

impl BinaryGrid {
    /// Number of covered (non-zero) cells.
    pub fn covered_cells(&self) -> usize {
        self.rows()
            .map(|r| r.iter().filter(|&&v| v != 0).count())
            .sum()
    }
}

impl SumGrid {
    /// Collapse block sums to presence: any sum above zero becomes 1.
    pub fn binarize(&self) -> BinaryGrid {
        let data = self.rows().flatten().map(|&s| u8::from(s > 0)).collect();
        BinaryGrid {
            w: self.w,
            h: self.h,
            stride: self.w,
            data,
        }
    }
}

impl<T: Copy> GridView for Grid<T> {
    type Cell = T;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[T] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl<T: Copy> GridViewMut for Grid<T> {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [T] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_rejects_ragged_input() {
        let rows = vec![vec![1u8, 0], vec![1]];
        assert!(BinaryGrid::from_rows(&rows).is_none());
    }

    #[test]
    fn padded_grid_keeps_existing_cells() {
        let grid = BinaryGrid::from_rows(&[[1u8, 0, 1], [0, 1, 0]]).unwrap();
        let padded = grid.padded_to(4, 4);
        assert_eq!(
            padded.to_rows(),
            vec![
                vec![1, 0, 1, 0],
                vec![0, 1, 0, 0],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
            ]
        );
        assert_eq!(padded.covered_cells(), grid.covered_cells());
    }

    #[test]
    fn covered_cells_counts_truthy_values() {
        let grid = BinaryGrid::from_rows(&[[0u8, 255], [3, 0]]).unwrap();
        assert_eq!(grid.covered_cells(), 2);
    }

    #[test]
    fn binarize_uses_strict_positive_test() {
        let sums = SumGrid::from_rows(&[[0u64, 1], [16, 0]]).unwrap();
        assert_eq!(sums.binarize().to_rows(), vec![vec![0, 1], vec![1, 0]]);
    }
}
