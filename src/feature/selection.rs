//! Closest-subcovering selection over a feature's cache.
use super::CacheEntry;
use crate::covering::Covering;
use crate::types::BoxSize;

/// Score assigned to candidates whose box overshoots the target.
pub const INVALID_SCORE: f64 = -1.0;

/// `cw/tw + ch/th`, or [`INVALID_SCORE`] when the sum exceeds 2.
///
/// Larger scores mean the candidate box is closer to the target, i.e. a
/// coarser starting point with less work left to do.
pub fn score(covering: &Covering, target: BoxSize) -> f64 {
    let s = covering.width() as f64 / target.width as f64
        + covering.height() as f64 / target.height as f64;
    if s > 2.0 {
        INVALID_SCORE
    } else {
        s
    }
}

/// A cache entry can seed a refinement towards `target` when it carries a
/// raster and its box evenly divides the target on both axes.
pub(crate) fn is_valid_subcovering(entry: &CacheEntry, target: BoxSize) -> bool {
    entry.is_refinable() && entry.covering().box_size().divides(target)
}

/// Index of the highest-scoring valid entry; the first maximum wins ties.
pub(crate) fn closest_valid_index(entries: &[CacheEntry], target: BoxSize) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, entry) in entries.iter().enumerate() {
        if !is_valid_subcovering(entry, target) {
            continue;
        }
        let s = score(entry.covering(), target);
        if s == INVALID_SCORE {
            continue;
        }
        if best.map_or(true, |(_, b)| s > b) {
            best = Some((idx, s));
        }
    }
    best.map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn covering(w: usize, h: usize) -> Covering {
        Covering::new(BoxSize::new(w, h), 0, 0).unwrap()
    }

    #[test]
    fn score_rewards_boxes_close_to_target() {
        let target = BoxSize::square(8);
        assert_eq!(score(&covering(1, 1), target), 0.25);
        assert_eq!(score(&covering(4, 4), target), 1.0);
        assert_eq!(score(&covering(8, 8), target), 2.0);
    }

    #[test]
    fn oversized_candidates_get_sentinel() {
        let target = BoxSize::new(4, 4);
        assert_eq!(score(&covering(8, 2), target), INVALID_SCORE);
        assert_eq!(score(&covering(16, 16), target), INVALID_SCORE);
    }
}
