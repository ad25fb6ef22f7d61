//! Grid conditioning and block-sum downsampling.
//!
//! Both helpers work in the grid's own cell units. Conditioning pads the
//! right and bottom edges with zeros so that every block is complete.
//! Aggregation sums each `box_w × box_h` block into a single cell; blocks
//! hanging over the right or bottom edge only see their in-bounds cells,
//! which gives the same sums as aggregating the conditioned grid without
//! building it.
use crate::raster::{BinaryGrid, GridView, GridViewMut, SumGrid};
use crate::types::BoxSize;

/// Cells to append along one axis so that `dim` becomes a multiple of `boxes`.
#[inline]
pub fn padding_for(dim: usize, boxes: usize) -> usize {
    (boxes - dim % boxes) % boxes
}

/// Dimensions of `grid` once padded to whole `boxes`, or `None` when the
/// padded grid cannot be addressed.
pub fn conditioned_dims(grid: &BinaryGrid, boxes: BoxSize) -> Option<(usize, usize)> {
    let w = grid.w.checked_add(padding_for(grid.w, boxes.width))?;
    let h = grid.h.checked_add(padding_for(grid.h, boxes.height))?;
    w.checked_mul(h)?;
    Some((w, h))
}

/// Zero-pad `grid` on the right and bottom so both dimensions are multiples of
/// `boxes`. `boxes` must be positive on both axes.
pub fn condition_grid(grid: &BinaryGrid, boxes: BoxSize) -> Option<BinaryGrid> {
    debug_assert!(boxes.is_positive());
    let (w, h) = conditioned_dims(grid, boxes)?;
    Some(grid.padded_to(w, h))
}

/// Sum every `boxes`-sized block of `grid`, one output cell per block.
pub fn block_sums(grid: &BinaryGrid, boxes: BoxSize) -> SumGrid {
    let (bw, bh) = (boxes.width, boxes.height);
    assert!(bw > 0 && bh > 0, "block sums need positive boxes, got {boxes}");
    let mut out = SumGrid::new(grid.w.div_ceil(bw), grid.h.div_ceil(bh));
    for (y, row) in grid.rows().enumerate() {
        let out_row = out.row_mut(y / bh);
        for (dst, block) in out_row.iter_mut().zip(row.chunks(bw)) {
            *dst += block.iter().map(|&v| u64::from(v)).sum::<u64>();
        }
    }
    out
}
