use crate::covering::Covering;
use crate::types::BoxSize;

/// Explicit requests a [`Feature`](super::Feature) can serve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CoveringOp {
    /// Record a covering computed elsewhere. It contributes a point to the
    /// history but carries no raster, so it never seeds a refinement.
    AttachExisting(Covering),
    /// Aggregate straight from this feature's raster, bypassing selection.
    GenerateNew(BoxSize),
    /// Refine from the closest valid cached covering.
    GenerateFromCache(BoxSize),
}
