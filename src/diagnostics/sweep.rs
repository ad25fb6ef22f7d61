use crate::source::SourcePoint;
use crate::types::CoveringPoint;
use serde::Serialize;

/// Outcome of one box size in a sweep.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepLevelReport {
    pub box_width: usize,
    pub box_height: usize,
    pub box_side: f64,
    pub count: usize,
    /// Dimensions of the covering grid (one cell per box).
    pub grid_width: usize,
    pub grid_height: usize,
    pub elapsed_ms: f64,
}

/// Everything a downstream dimension fit needs, plus timing.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepReport {
    pub input_width: usize,
    pub input_height: usize,
    pub levels: Vec<SweepLevelReport>,
    /// Full `(box side, count)` history of the root, starting with its own
    /// resolution.
    pub points: Vec<CoveringPoint>,
    /// Counts from an independent-roots source sweep, when one was run.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub source_points: Vec<SourcePoint>,
    pub total_ms: f64,
}
