//! Box-counting sweep over a root feature.
//!
//! Visits a schedule of box sizes through
//! [`Feature::generate_covering_from_existing`] so every level reuses the
//! closest coarser intermediate, and collects a [`SweepReport`].
pub mod schedule;

pub use self::schedule::BoxSchedule;

use crate::covering::CoveringError;
use crate::diagnostics::{SweepLevelReport, SweepReport};
use crate::feature::Feature;
use crate::raster::GridView;
use crate::types::BoxSize;
use log::{debug, warn};
use std::time::Instant;

/// Generate a covering for each size in order and report the counts.
pub fn run_sweep(root: &mut Feature, sizes: &[BoxSize]) -> Result<SweepReport, CoveringError> {
    let total_start = Instant::now();
    let (input_width, input_height) = (root.grid().width(), root.grid().height());
    let mut levels: Vec<SweepLevelReport> = Vec::with_capacity(sizes.len());

    for &size in sizes {
        let start = Instant::now();
        let covering = root.generate_covering_from_existing(size)?;
        let level = SweepLevelReport {
            box_width: size.width,
            box_height: size.height,
            box_side: size.side(),
            count: covering.count(),
            grid_width: covering.grid().w,
            grid_height: covering.grid().h,
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        };
        debug!(
            "run_sweep box={size} count={} grid={}x{} elapsed_ms={:.3}",
            level.count, level.grid_width, level.grid_height, level.elapsed_ms
        );
        if let Some(prev) = levels.last().filter(|prev| count_grew(prev, &level)) {
            warn!(
                "run_sweep count grew from {} at {}x{} to {} at {size}",
                prev.count, prev.box_width, prev.box_height, level.count
            );
        }
        levels.push(level);
    }

    Ok(SweepReport {
        input_width,
        input_height,
        levels,
        points: root.history().to_vec(),
        source_points: Vec::new(),
        total_ms: total_start.elapsed().as_secs_f64() * 1000.0,
    })
}

/// Counts are only comparable when the earlier box evenly divides the later
/// one; otherwise a larger count is legitimate.
fn count_grew(prev: &SweepLevelReport, level: &SweepLevelReport) -> bool {
    let prev_size = BoxSize::new(prev.box_width, prev.box_height);
    let size = BoxSize::new(level.box_width, level.box_height);
    prev_size.divides(size) && level.count > prev.count
}
