use crate::detector::LaneParams;
use crate::error::LaneError;
use crate::types::LaneGeometry;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration of the `lane_polygons` tool.
#[derive(Debug, Deserialize)]
pub struct LaneToolConfig {
    /// JSON array of Hough segments.
    pub segments: PathBuf,
    /// Optional ROI mask image; the default trapezoid is used when absent.
    #[serde(default)]
    pub mask: Option<PathBuf>,
    /// Frame size; required when no mask image gives it.
    #[serde(default)]
    pub frame: Option<FrameConfig>,
    /// Overrides the geometry derived from the frame size.
    #[serde(default)]
    pub geometry: Option<LaneGeometry>,
    #[serde(default)]
    pub params: LaneParams,
    pub output: LaneOutputConfig,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct FrameConfig {
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Deserialize)]
pub struct LaneOutputConfig {
    /// Detection report (polygons and trace).
    pub report_json: PathBuf,
    /// Optional PNG dump of the ROI mask that was used.
    #[serde(default)]
    pub mask_image: Option<PathBuf>,
}

impl LaneToolConfig {
    /// Geometry override, or the default band for the given frame size.
    pub fn geometry_for(&self, width: usize, height: usize) -> LaneGeometry {
        self.geometry
            .unwrap_or_else(|| LaneGeometry::for_frame(width, height))
    }
}

pub fn parse_config(data: &str) -> Result<LaneToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}

pub fn load_config(path: &Path) -> Result<LaneToolConfig, LaneError> {
    let data = fs::read_to_string(path)
        .map_err(|e| LaneError::Config(format!("Failed to read config {}: {e}", path.display())))?;
    parse_config(&data)
        .map_err(|e| LaneError::Config(format!("Failed to parse config {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let cfg = parse_config(
            r#"{
                "segments": "segments.json",
                "frame": {"width": 960, "height": 540},
                "output": {"report_json": "out/report.json"}
            }"#,
        )
        .unwrap();
        assert!(cfg.mask.is_none());
        assert_eq!(cfg.params, LaneParams::default());
        assert_eq!(cfg.geometry_for(960, 540), LaneGeometry::for_frame(960, 540));
    }

    #[test]
    fn partial_params_override_only_named_fields() {
        let cfg = parse_config(
            r#"{
                "segments": "s.json",
                "geometry": {"lower_bound": 400, "upper_bound": 200, "horizontal_limit": 800},
                "params": {"slope_variance": 0.1, "signals": {"magnitude_thresh": 50.0}},
                "output": {"report_json": "r.json"}
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.params.slope_variance, 0.1);
        assert_eq!(cfg.params.signals.magnitude_thresh, 50.0);
        assert_eq!(
            cfg.params.signals.slope_max_cutoff,
            crate::detector::params::SLOPE_MAX_CUTOFF
        );
        assert_eq!(cfg.geometry_for(10, 10), LaneGeometry::new(400, 200, 800));
    }
}
