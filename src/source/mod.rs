//! External raster sources.
//!
//! A [`RasterSource`] rasterizes the feature directly at a requested cell
//! size, independently for every resolution. [`SourceSweep`] records the
//! resulting `(resolution, count)` pairs. These counts are not expected to
//! match the hierarchical aggregation done by [`Feature`]: a source samples
//! the geometry afresh at each resolution while the feature tree coarsens a
//! single rasterization.

pub mod mask_image;

pub use self::mask_image::MaskImageSource;

use crate::covering::CoveringError;
use crate::feature::Feature;
use crate::raster::BinaryGrid;
use crate::types::BoxSize;
use log::debug;
use serde::Serialize;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Reasons a source may fail to produce a raster.
#[derive(Clone, Debug, PartialEq)]
pub enum SourceError {
    InvalidResolution { resolution: f64 },
    EmptyRaster { resolution: f64 },
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::InvalidResolution { resolution } => {
                write!(f, "resolution must be finite and positive, got {resolution}")
            }
            SourceError::EmptyRaster { resolution } => {
                write!(f, "source produced an empty raster at resolution {resolution}")
            }
        }
    }
}

impl std::error::Error for SourceError {}

/// Produces a presence raster at a given cell size (source units per cell).
pub trait RasterSource {
    fn rasterize(&self, resolution: f64) -> Result<BinaryGrid, SourceError>;
}

impl<F> RasterSource for F
where
    F: Fn(f64) -> Result<BinaryGrid, SourceError>,
{
    fn rasterize(&self, resolution: f64) -> Result<BinaryGrid, SourceError> {
        self(resolution)
    }
}

/// One independently rasterized resolution.
#[derive(Clone, Debug)]
pub struct SourceLevel {
    pub resolution: f64,
    pub grid: BinaryGrid,
    pub count: usize,
}

impl SourceLevel {
    /// Treat this raster as a root feature whose cells are `cell_boxes` wide
    /// in the caller's common box units.
    pub fn into_feature(self, cell_boxes: BoxSize) -> Result<Feature, CoveringError> {
        Feature::with_resolution(self.grid, cell_boxes)
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourcePoint {
    pub resolution: f64,
    pub count: usize,
}

/// Independent-roots sweep over a [`RasterSource`].
#[derive(Debug, Default)]
pub struct SourceSweep {
    levels: Vec<SourceLevel>,
}

impl SourceSweep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rasterize each resolution and record its covered-cell count. With the
    /// `parallel` feature the resolutions are rasterized concurrently; the
    /// recorded order always follows `resolutions`.
    pub fn run<S>(&mut self, source: &S, resolutions: &[f64]) -> Result<(), SourceError>
    where
        S: RasterSource + Sync + ?Sized,
    {
        #[cfg(feature = "parallel")]
        let rasters: Vec<Result<SourceLevel, SourceError>> = resolutions
            .par_iter()
            .map(|&r| rasterize_level(source, r))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let rasters: Vec<Result<SourceLevel, SourceError>> = resolutions
            .iter()
            .map(|&r| rasterize_level(source, r))
            .collect();

        let levels = rasters.into_iter().collect::<Result<Vec<_>, _>>()?;
        for level in levels {
            debug!(
                "SourceSweep::run resolution={} grid={}x{} count={}",
                level.resolution, level.grid.w, level.grid.h, level.count
            );
            self.levels.push(level);
        }
        Ok(())
    }

    pub fn levels(&self) -> &[SourceLevel] {
        &self.levels
    }

    pub fn into_levels(self) -> Vec<SourceLevel> {
        self.levels
    }

    /// Recorded `(resolution, count)` pairs, in request order.
    pub fn points(&self) -> Vec<SourcePoint> {
        self.levels
            .iter()
            .map(|l| SourcePoint {
                resolution: l.resolution,
                count: l.count,
            })
            .collect()
    }
}

fn rasterize_level<S>(source: &S, resolution: f64) -> Result<SourceLevel, SourceError>
where
    S: RasterSource + ?Sized,
{
    if !resolution.is_finite() || resolution <= 0.0 {
        return Err(SourceError::InvalidResolution { resolution });
    }
    let grid = source.rasterize(resolution)?;
    let count = grid.covered_cells();
    Ok(SourceLevel {
        resolution,
        grid,
        count,
    })
}
