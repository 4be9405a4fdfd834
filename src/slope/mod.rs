//! Slope statistics and the dominant slope estimate.
//!
//! Signals are split by slope sign (`slope < 0` is the right lane in image
//! coordinates), near-horizontal ones are dropped, and each remaining side is
//! summarised. The dominant slope is the mean of the absolute side means; it
//! centres the acceptance band used by the interpolator.

mod estimator;
mod stats;

pub use estimator::{estimate_mean_slope, estimate_slope, SlopeEstimate};
pub use stats::{partition_slopes, slope_statistics, SideStats, SlopePartition, SlopeStats};
