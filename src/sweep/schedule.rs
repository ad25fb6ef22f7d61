use crate::types::BoxSize;
use serde::Deserialize;

/// Box sizes to visit during a sweep, in root raster cells.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BoxSchedule {
    /// Square boxes of side 2, 4, …, 2^levels.
    Dyadic { levels: usize },
    /// Arbitrary `[width, height]` pairs, visited in the given order.
    Explicit { sizes: Vec<[usize; 2]> },
}

impl Default for BoxSchedule {
    fn default() -> Self {
        BoxSchedule::Dyadic { levels: 6 }
    }
}

/// Largest dyadic level whose square box area still fits in `usize`.
pub const MAX_DYADIC_LEVELS: usize = (usize::BITS / 2 - 1) as usize;

impl BoxSchedule {
    pub fn sizes(&self) -> Result<Vec<BoxSize>, String> {
        match self {
            BoxSchedule::Dyadic { levels } if *levels > MAX_DYADIC_LEVELS => Err(format!(
                "dyadic schedule supports at most {MAX_DYADIC_LEVELS} levels, got {levels}"
            )),
            BoxSchedule::Dyadic { levels } => Ok((1..=*levels as u32)
                .map(|k| BoxSize::square(1usize << k))
                .collect()),
            BoxSchedule::Explicit { sizes } => {
                Ok(sizes.iter().map(|&[w, h]| BoxSize::new(w, h)).collect())
            }
        }
    }

    /// Dyadic schedule that stops once a box spans the whole raster.
    pub fn dyadic_for(width: usize, height: usize) -> Self {
        let longest = width.max(height).max(1);
        let levels = longest.next_power_of_two().trailing_zeros() as usize;
        BoxSchedule::Dyadic { levels }
    }
}
