use crate::feature::{Feature, Provenance};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Own,
    Attached,
    Materialized,
    Delegated,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheEntryReport {
    pub box_width: usize,
    pub box_height: usize,
    pub count: usize,
    pub kind: EntryKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via: Option<usize>,
    /// Cache of the owned child, for materialized entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child: Option<CacheReport>,
}

/// Snapshot of a feature's cache, recursing into owned children.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheReport {
    pub resolution_width: usize,
    pub resolution_height: usize,
    pub entries: Vec<CacheEntryReport>,
}

impl CacheReport {
    pub fn from_feature(feature: &Feature) -> Self {
        let entries = feature
            .entries()
            .iter()
            .map(|entry| {
                let covering = entry.covering();
                let (kind, via, child) = match entry.provenance() {
                    Provenance::Own => (EntryKind::Own, None, None),
                    Provenance::Attached => (EntryKind::Attached, None, None),
                    Provenance::Materialized(child) => (
                        EntryKind::Materialized,
                        None,
                        Some(CacheReport::from_feature(child)),
                    ),
                    Provenance::Delegated { via } => (EntryKind::Delegated, Some(*via), None),
                };
                CacheEntryReport {
                    box_width: covering.width(),
                    box_height: covering.height(),
                    count: covering.count(),
                    kind,
                    via,
                    child,
                }
            })
            .collect();
        let resolution = feature.resolution();
        Self {
            resolution_width: resolution.width,
            resolution_height: resolution.height,
            entries,
        }
    }

    /// Number of entries of `kind` in this cache and every owned child.
    pub fn count_kind(&self, kind: EntryKind) -> usize {
        self.entries
            .iter()
            .map(|e| {
                usize::from(e.kind == kind) + e.child.as_ref().map_or(0, |c| c.count_kind(kind))
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::BinaryGrid;
    use crate::types::BoxSize;

    #[test]
    fn report_mirrors_cache_tree() {
        let grid = BinaryGrid::from_vec(8, 8, vec![1; 64]).unwrap();
        let mut root = Feature::new(grid);
        root.generate_covering_from_existing(BoxSize::square(2)).unwrap();
        root.generate_covering_from_existing(BoxSize::square(4)).unwrap();

        let report = CacheReport::from_feature(&root);
        let kinds: Vec<_> = report.entries.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![EntryKind::Own, EntryKind::Materialized, EntryKind::Delegated]
        );
        assert_eq!(report.entries[2].via, Some(1));
        assert_eq!(report.count_kind(EntryKind::Materialized), 2);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["entries"][1]["kind"], "materialized");
        assert_eq!(json["entries"][1]["child"]["resolutionWidth"], 2);
    }
}
