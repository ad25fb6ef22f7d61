//! Feature rasters and hierarchical covering generation.
//!
//! A [`Feature`] owns a binary grid at some resolution (the box size one of
//! its cells represents in root raster cells) together with a cache of the
//! coverings derived from it. The first cache entry is always the feature
//! itself. Requests for coarser coverings are served from the closest cached
//! covering whose box evenly divides the target, so a sweep over growing box
//! sizes keeps aggregating from the most recent intermediate instead of
//! rescanning the root raster.
//!
//! Ownership forms a strict tree. A feature materialized by aggregation is
//! owned by the feature that aggregated it; ancestors that forwarded the
//! request only record the summary and the index of the child they went
//! through ([`Provenance::Delegated`]).

pub mod aggregate;
pub mod ops;
pub mod selection;

pub use self::ops::CoveringOp;
pub use self::selection::{score, INVALID_SCORE};

use crate::covering::{Covering, CoveringError};
use crate::raster::{BinaryGrid, GridView, SumGrid};
use crate::types::{BoxSize, CoveringPoint};
use log::debug;

/// Where a cached covering came from.
#[derive(Clone, Debug)]
pub enum Provenance {
    /// The owning feature's own resolution (always entry 0).
    Own,
    /// A summary supplied by the caller; no raster behind it.
    Attached,
    /// Aggregated here; the child feature is owned by this entry.
    Materialized(Box<Feature>),
    /// Materialized deeper in the tree, reachable through entry `via`.
    Delegated { via: usize },
}

/// One cached covering and its provenance.
#[derive(Clone, Debug)]
pub struct CacheEntry {
    covering: Covering,
    provenance: Provenance,
}

impl CacheEntry {
    pub fn covering(&self) -> &Covering {
        &self.covering
    }

    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    /// Entries backed by a raster somewhere in the tree.
    pub fn is_refinable(&self) -> bool {
        !matches!(self.provenance, Provenance::Attached)
    }
}

#[derive(Clone, Debug)]
pub struct Feature {
    grid: BinaryGrid,
    resolution: BoxSize,
    cache: Vec<CacheEntry>,
    history: Vec<CoveringPoint>,
}

impl Feature {
    /// Root feature over the finest raster (resolution 1×1).
    pub fn new(grid: BinaryGrid) -> Self {
        Self::from_parts(grid, BoxSize::UNIT)
    }

    /// Root feature whose cells already stand for `resolution` boxes, e.g. a
    /// raster produced by an external source at a coarser cell size.
    pub fn with_resolution(grid: BinaryGrid, resolution: BoxSize) -> Result<Self, CoveringError> {
        if !resolution.is_positive() {
            return Err(CoveringError::invalid(
                resolution,
                "feature resolution must be positive",
            ));
        }
        if resolution.area().is_none() {
            return Err(CoveringError::invalid(
                resolution,
                "feature resolution area overflows usize",
            ));
        }
        Ok(Self::from_parts(grid, resolution))
    }

    fn from_parts(grid: BinaryGrid, resolution: BoxSize) -> Self {
        let own = Covering::new(resolution, grid.covered_cells(), grid.cell_count())
            .expect("covered cells never exceed grid cells for a positive resolution");
        Self {
            grid,
            resolution,
            cache: vec![CacheEntry {
                covering: own,
                provenance: Provenance::Own,
            }],
            history: vec![own.point()],
        }
    }

    pub fn grid(&self) -> &BinaryGrid {
        &self.grid
    }

    /// Box size one cell of this feature represents, in root cells.
    pub fn resolution(&self) -> BoxSize {
        self.resolution
    }

    /// Number of covered cells in this feature's grid.
    pub fn count(&self) -> usize {
        self.own_covering().count()
    }

    /// The self-entry summary.
    pub fn own_covering(&self) -> Covering {
        self.cache[0].covering
    }

    pub fn entries(&self) -> &[CacheEntry] {
        &self.cache
    }

    pub fn coverings(&self) -> impl Iterator<Item = &Covering> + '_ {
        self.cache.iter().map(|e| &e.covering)
    }

    pub fn history(&self) -> &[CoveringPoint] {
        &self.history
    }

    /// Box sides and the parallel covering counts, in request order.
    pub fn covering_points(&self) -> (Vec<f64>, Vec<usize>) {
        self.history.iter().map(|p| (p.box_side, p.count)).unzip()
    }

    /// Features materialized anywhere below this one.
    pub fn materialized_features(&self) -> usize {
        self.cache
            .iter()
            .map(|e| match &e.provenance {
                Provenance::Materialized(child) => 1 + child.materialized_features(),
                _ => 0,
            })
            .sum()
    }

    /// Pad the grid with zeros so it divides evenly into `boxes` (in this
    /// feature's own cells).
    pub fn condition(&self, boxes: BoxSize) -> Result<BinaryGrid, CoveringError> {
        if !boxes.is_positive() {
            return Err(CoveringError::invalid(boxes, "box dimensions must be positive"));
        }
        aggregate::condition_grid(&self.grid, boxes).ok_or(CoveringError::invalid(
            boxes,
            "conditioned grid size overflows usize",
        ))
    }

    /// Exact per-box sums, equal to summing the conditioned grid block by
    /// block.
    pub fn block_sums(&self, boxes: BoxSize) -> Result<SumGrid, CoveringError> {
        if !boxes.is_positive() {
            return Err(CoveringError::invalid(boxes, "box dimensions must be positive"));
        }
        Ok(aggregate::block_sums(&self.grid, boxes))
    }

    /// Aggregate this feature's raster into `boxes`-sized boxes (own cell
    /// units). A box is covered when any of its cells is.
    pub fn generate_covering(&self, boxes: BoxSize) -> Result<Feature, CoveringError> {
        let resolution = self
            .resolution
            .scaled(boxes)
            .filter(|r| r.area().is_some())
            .ok_or(CoveringError::invalid(
                boxes,
                "covering resolution overflows usize",
            ))?;
        let sums = self.block_sums(boxes)?;
        debug!(
            "Feature::generate_covering {}x{} @ {} -> {}x{} @ {}",
            self.grid.w, self.grid.h, self.resolution, sums.w, sums.h, resolution
        );
        Ok(Feature::from_parts(sums.binarize(), resolution))
    }

    /// Refinable cache entries whose box evenly divides `target`.
    pub fn valid_subcoverings(&self, target: BoxSize) -> Vec<&CacheEntry> {
        self.cache
            .iter()
            .filter(|e| selection::is_valid_subcovering(e, target))
            .collect()
    }

    /// The valid entry with the highest [`score`] for `target`.
    pub fn closest_valid_subcovering(&self, target: BoxSize) -> Result<&CacheEntry, CoveringError> {
        let idx = self.closest_valid_index(target)?;
        Ok(&self.cache[idx])
    }

    /// Covering at `target` (root cells), reusing the closest cached covering.
    ///
    /// Returns the materialized feature for the requested box size. Asking
    /// for a box size that is already cached returns the cached feature and
    /// leaves the cache and history untouched.
    pub fn generate_covering_from_existing(
        &mut self,
        target: BoxSize,
    ) -> Result<&Feature, CoveringError> {
        self.refine_from_cache(target)?;
        self.find_covering(target)
            .ok_or(CoveringError::InvalidState {
                target,
                resolution: self.resolution,
            })
    }

    /// Serve a [`CoveringOp`] and return the resulting summary.
    pub fn apply(&mut self, op: CoveringOp) -> Result<Covering, CoveringError> {
        match op {
            CoveringOp::AttachExisting(covering) => {
                self.push_entry(covering, Provenance::Attached);
                Ok(covering)
            }
            CoveringOp::GenerateNew(target) => {
                let local = self.check_target(target)?;
                if let Some(covering) = self.exact_entry(target) {
                    return Ok(covering);
                }
                self.aggregate_own(local)
            }
            CoveringOp::GenerateFromCache(target) => self.refine_from_cache(target),
        }
    }

    /// Materialized feature at `target`, if one is reachable from here.
    pub fn find_covering(&self, target: BoxSize) -> Option<&Feature> {
        if target == self.resolution {
            return Some(self);
        }
        self.cache
            .iter()
            .filter(|e| e.covering.box_size() == target)
            .find_map(|e| match &e.provenance {
                Provenance::Materialized(child) => Some(&**child),
                Provenance::Delegated { via } => self.child(*via)?.find_covering(target),
                Provenance::Own | Provenance::Attached => None,
            })
    }

    fn refine_from_cache(&mut self, target: BoxSize) -> Result<Covering, CoveringError> {
        let local = self.check_target(target)?;
        if let Some(covering) = self.exact_entry(target) {
            debug!("Feature::refine {target} already cached at {}", self.resolution);
            return Ok(covering);
        }

        let idx = self.closest_valid_index(target)?;
        let route = match self.cache[idx].provenance {
            Provenance::Own => None,
            Provenance::Materialized(_) => Some(idx),
            Provenance::Delegated { via } => Some(via),
            Provenance::Attached => {
                return Err(CoveringError::InvalidState {
                    target,
                    resolution: self.resolution,
                })
            }
        };
        match route {
            None => self.aggregate_own(local),
            Some(via) => {
                let resolution = self.resolution;
                let child = self
                    .child_mut(via)
                    .ok_or(CoveringError::InvalidState { target, resolution })?;
                debug!(
                    "Feature::refine {target} at {resolution} -> delegate to {}",
                    child.resolution
                );
                let covering = child.refine_from_cache(target)?;
                self.push_entry(covering, Provenance::Delegated { via });
                Ok(covering)
            }
        }
    }

    fn aggregate_own(&mut self, local: BoxSize) -> Result<Covering, CoveringError> {
        let child = self.generate_covering(local)?;
        let covering = child.own_covering();
        self.push_entry(covering, Provenance::Materialized(Box::new(child)));
        Ok(covering)
    }

    /// Validate a root-relative target and convert it to own cell units.
    fn check_target(&self, target: BoxSize) -> Result<BoxSize, CoveringError> {
        if !target.is_positive() {
            return Err(CoveringError::invalid(target, "box dimensions must be positive"));
        }
        if target.area().is_none() {
            return Err(CoveringError::invalid(target, "box area overflows usize"));
        }
        target.checked_div(self.resolution).ok_or(CoveringError::invalid(
            target,
            "box size is not a multiple of the feature resolution",
        ))
    }

    fn exact_entry(&self, target: BoxSize) -> Option<Covering> {
        self.cache
            .iter()
            .find(|e| e.is_refinable() && e.covering.box_size() == target)
            .map(|e| e.covering)
    }

    fn closest_valid_index(&self, target: BoxSize) -> Result<usize, CoveringError> {
        selection::closest_valid_index(&self.cache, target).ok_or(CoveringError::InvalidState {
            target,
            resolution: self.resolution,
        })
    }

    fn push_entry(&mut self, covering: Covering, provenance: Provenance) {
        self.history.push(covering.point());
        self.cache.push(CacheEntry {
            covering,
            provenance,
        });
    }

    fn child(&self, idx: usize) -> Option<&Feature> {
        match &self.cache.get(idx)?.provenance {
            Provenance::Materialized(child) => Some(&**child),
            _ => None,
        }
    }

    fn child_mut(&mut self, idx: usize) -> Option<&mut Feature> {
        match &mut self.cache.get_mut(idx)?.provenance {
            Provenance::Materialized(child) => Some(&mut **child),
            _ => None,
        }
    }
}
