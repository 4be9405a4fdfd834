//! Lane detector orchestrating the straight-lane pipeline.
//!
//! Modules
//! - [`params`] – tunables for every stage, with serde support for tools.
//! - `pipeline` – the [`LaneDetector`] implementation.

pub mod params;
mod pipeline;

pub use params::{LaneParams, PolygonParams, SignalParams};
pub use pipeline::{FrameInput, LaneDetector};
