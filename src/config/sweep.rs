use crate::sweep::BoxSchedule;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct SweepToolConfig {
    /// Feature mask image; bright pixels mark the feature.
    pub input: PathBuf,
    /// Luminance at or above which a pixel counts as covered.
    #[serde(default = "default_threshold")]
    pub threshold: u8,
    /// Box sizes to visit. Defaults to a dyadic schedule spanning the input.
    #[serde(default)]
    pub schedule: Option<BoxSchedule>,
    /// Resolutions for an independent-roots comparison sweep.
    #[serde(default)]
    pub compare_source: Vec<f64>,
    pub output: SweepOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct SweepOutputConfig {
    pub report_json: PathBuf,
    /// Directory for per-level covering PNGs.
    #[serde(default)]
    pub debug_dir: Option<PathBuf>,
}

fn default_threshold() -> u8 {
    128
}

pub fn load_config(path: &Path) -> Result<SweepToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn parse_config(data: &str) -> Result<SweepToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let cfg = parse_config(
            r#"{"input":"coast.png","output":{"report_json":"out/report.json"}}"#,
        )
        .unwrap();
        assert_eq!(cfg.threshold, 128);
        assert!(cfg.schedule.is_none());
        assert!(cfg.compare_source.is_empty());
        assert!(cfg.output.debug_dir.is_none());
    }

    #[test]
    fn full_config_round_trips_fields() {
        let cfg = parse_config(
            r#"{
                "input": "coast.png",
                "threshold": 40,
                "schedule": {"kind": "dyadic", "levels": 3},
                "compare_source": [1.0, 2.0],
                "output": {"report_json": "r.json", "debug_dir": "dbg"}
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.threshold, 40);
        assert_eq!(cfg.schedule, Some(BoxSchedule::Dyadic { levels: 3 }));
        assert_eq!(cfg.compare_source, vec![1.0, 2.0]);
        assert_eq!(cfg.output.debug_dir, Some(PathBuf::from("dbg")));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_config(Path::new("/nonexistent/box_count.json")).unwrap_err();
        assert!(err.contains("/nonexistent/box_count.json"));
    }
}
