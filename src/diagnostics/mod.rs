//! Structured per-frame diagnostics.
//!
//! The trace is the pipeline's observability handle: every stage reports its
//! counts, per-item decisions and elapsed time.

pub mod pipeline;
pub mod stages;
pub mod timing;

pub use pipeline::{DetectionReport, InputDescriptor, PipelineTrace};
pub use stages::{ClassificationStage, InterpolationStage, PolygonStage, SlopeStage};
pub use timing::{StageTiming, TimingBreakdown};
