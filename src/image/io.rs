//! I/O helpers for region masks, segment lists and JSON reports.
//!
//! - `load_region_mask`: decode an image and keep its first channel as a mask.
//! - `save_grayscale_u8`: write an owned 8-bit buffer to a PNG.
//! - `load_segments_json`: read Hough segments from a JSON array.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageU8, RegionMask};
use crate::error::LaneError;
use crate::types::LineSegment;
use image::{DynamicImage, ImageBuffer, Luma};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Owned 8-bit grayscale buffer with stride and borrowed view conversion.
#[derive(Clone, Debug)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    stride: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Construct an owned grayscale buffer given raw bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        let stride = width;
        Self {
            width,
            height,
            stride,
            data,
        }
    }

    /// Zero-filled buffer.
    pub fn zeros(width: usize, height: usize) -> Self {
        Self::new(width, height, vec![0; width * height])
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        self.data[y * self.stride + x] = value;
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.stride,
            data: &self.data,
        }
    }
}

impl RegionMask for GrayImageU8 {
    #[inline]
    fn contains(&self, x: i32, y: i32) -> bool {
        self.as_view().contains(x, y)
    }
}

/// Load a mask image from disk. Only the first channel is kept, so colour
/// masks behave like their red channel and grayscale masks like their luma.
pub fn load_region_mask(path: &Path) -> Result<GrayImageU8, LaneError> {
    let img = image::open(path)
        .map_err(|e| LaneError::Io(format!("Failed to open {}: {e}", path.display())))?
        .into_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.pixels().map(|px| px.0[0]).collect();
    Ok(GrayImageU8::new(width, height, data))
}

/// Save an 8-bit grayscale buffer to a PNG.
pub fn save_grayscale_u8(buffer: &GrayImageU8, path: &Path) -> Result<(), LaneError> {
    ensure_parent_dir(path)?;
    let data = buffer.data.clone();
    let image: ImageBuffer<Luma<u8>, Vec<u8>> =
        ImageBuffer::from_raw(buffer.width as u32, buffer.height as u32, data)
            .ok_or_else(|| LaneError::Io("Failed to create image buffer".to_string()))?;
    DynamicImage::ImageLuma8(image)
        .save(path)
        .map_err(|e| LaneError::Io(format!("Failed to save {}: {e}", path.display())))
}

/// Accepted on-disk segment layouts: `[x1, y1, x2, y2]` arrays (the flattened
/// Hough output) or objects with named fields.
#[derive(Deserialize)]
#[serde(untagged)]
enum SegmentRecord {
    Flat([i32; 4]),
    Nested([[i32; 4]; 1]),
    Named(LineSegment),
}

impl From<SegmentRecord> for LineSegment {
    fn from(rec: SegmentRecord) -> Self {
        match rec {
            SegmentRecord::Flat(v) => v.into(),
            SegmentRecord::Nested([v]) => v.into(),
            SegmentRecord::Named(seg) => seg,
        }
    }
}

/// Read a JSON array of Hough segments.
pub fn load_segments_json(path: &Path) -> Result<Vec<LineSegment>, LaneError> {
    let data = fs::read_to_string(path)
        .map_err(|e| LaneError::Io(format!("Failed to read segments {}: {e}", path.display())))?;
    parse_segments_json(&data)
        .map_err(|e| LaneError::Io(format!("Failed to parse segments {}: {e}", path.display())))
}

pub fn parse_segments_json(data: &str) -> Result<Vec<LineSegment>, serde_json::Error> {
    let records: Vec<SegmentRecord> = serde_json::from_str(data)?;
    Ok(records.into_iter().map(LineSegment::from).collect())
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), LaneError> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|e| {
        LaneError::Io(format!("Failed to serialize JSON for {}: {e}", path.display()))
    })?;
    fs::write(path, json)
        .map_err(|e| LaneError::Io(format!("Failed to write JSON {}: {e}", path.display())))
}

fn ensure_parent_dir(path: &Path) -> Result<(), LaneError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                LaneError::Io(format!("Failed to create {}: {e}", parent.display()))
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_json_accepts_all_layouts() {
        let json = r#"[
            [0, 400, 100, 300],
            [[10, 20, 30, 40]],
            {"x1": 1, "y1": 2, "x2": 3, "y2": 4}
        ]"#;
        let segs = parse_segments_json(json).unwrap();
        assert_eq!(
            segs,
            vec![
                LineSegment::new(0, 400, 100, 300),
                LineSegment::new(10, 20, 30, 40),
                LineSegment::new(1, 2, 3, 4),
            ]
        );
    }

    #[test]
    fn only_the_first_channel_of_a_colour_mask_counts() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("mask.png");
        let mut rgb = image::RgbImage::new(2, 1);
        rgb.put_pixel(0, 0, image::Rgb([0, 255, 0]));
        rgb.put_pixel(1, 0, image::Rgb([255, 0, 0]));
        rgb.save(&path).expect("write mask png");

        let mask = load_region_mask(&path).expect("load mask");
        assert_eq!((mask.width(), mask.height()), (2, 1));
        assert!(!mask.contains(0, 0));
        assert!(mask.contains(1, 0));
    }

    #[test]
    fn missing_mask_file_is_an_io_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = load_region_mask(&temp.path().join("absent.png")).unwrap_err();
        assert!(matches!(err, LaneError::Io(_)));
    }

    #[test]
    fn owned_buffer_acts_as_mask() {
        let mut mask = GrayImageU8::zeros(4, 3);
        mask.set(2, 1, 255);
        assert!(mask.contains(2, 1));
        assert!(!mask.contains(1, 2));
        assert!(!mask.contains(4, 1));
    }
}
