use thiserror::Error;

/// Errors surfaced by the lane pipeline and its tooling helpers.
///
/// Per-segment and per-line rejections are not errors; they are reported as
/// verdicts in the stage diagnostics.
#[derive(Debug, Error)]
pub enum LaneError {
    /// Statistics or point averages requested over an empty collection.
    #[error("empty aggregation: no {what} to aggregate")]
    EmptyAggregation { what: &'static str },

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(String),
}
