use lane_detector::config::lanes;
use lane_detector::image::io::{
    load_region_mask, load_segments_json, save_grayscale_u8, write_json_file,
};
use lane_detector::image::{default_roi_mask, GrayImageU8};
use lane_detector::{LaneDetector, LaneError};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), LaneError> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = lanes::load_config(Path::new(&config_path))?;

    let segments = load_segments_json(&config.segments)?;
    let mask: GrayImageU8 = match (&config.mask, config.frame) {
        (Some(path), _) => load_region_mask(path)?,
        (None, Some(frame)) => default_roi_mask(frame.width, frame.height),
        (None, None) => {
            return Err(LaneError::Config(
                "either `mask` or `frame` must be provided".to_string(),
            ))
        }
    };
    let geometry = config.geometry_for(mask.width(), mask.height());

    let detector = LaneDetector::new(config.params);
    let report = detector.process_with_diagnostics(&segments, &mask, &geometry);

    write_json_file(&config.output.report_json, &report)?;
    if let Some(path) = &config.output.mask_image {
        save_grayscale_u8(&mask, path)?;
    }

    println!("{}", report.trace.summary());
    println!(
        "left: {}  right: {}",
        describe(report.lanes.left.map(|p| p.vertices)),
        describe(report.lanes.right.map(|p| p.vertices))
    );
    println!(
        "Saved detection report to {}",
        config.output.report_json.display()
    );
    Ok(())
}

fn describe(vertices: Option<[[i32; 2]; 4]>) -> String {
    vertices
        .map(|v| format!("{v:?}"))
        .unwrap_or_else(|| "absent".to_string())
}

fn usage() -> LaneError {
    LaneError::Config("Usage: lane_polygons <config.json>".to_string())
}
