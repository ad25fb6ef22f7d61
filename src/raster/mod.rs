//! Binary raster storage used by the covering engine.
//!
//! Grids are owned, row-major and tightly packed (`stride == width`). A cell
//! value of zero means "not covered"; any other value counts as covered.
pub mod grid;
pub mod io;
pub mod traits;

pub use self::grid::{BinaryGrid, Grid, SumGrid};
pub use self::traits::{GridView, GridViewMut, Rows};
