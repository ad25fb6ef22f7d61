#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod covering;
pub mod diagnostics;
pub mod feature;
pub mod raster;
pub mod sweep;
pub mod types;

// Collaborator adapters and tool plumbing.
pub mod config;
pub mod source;

// --- High-level re-exports -------------------------------------------------

pub use crate::covering::{Covering, CoveringError};
pub use crate::feature::{CoveringOp, Feature};
pub use crate::sweep::{run_sweep, BoxSchedule};
pub use crate::types::{BoxSize, CoveringPoint};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use box_counting::prelude::*;
///
/// let grid = BinaryGrid::from_rows(&[[1u8, 1, 0, 0], [1, 1, 0, 0]]).unwrap();
/// let mut root = Feature::new(grid);
/// let covering = root.generate_covering_from_existing(BoxSize::square(2)).unwrap();
/// assert_eq!(covering.count(), 1);
/// ```
pub mod prelude {
    pub use crate::raster::{BinaryGrid, GridView};
    pub use crate::{run_sweep, BoxSchedule, BoxSize, Covering, CoveringOp, Feature};
}
