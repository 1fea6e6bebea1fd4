//! Summary statistics for time series of impact samples.
//!
//! [`stats::compute`] turns samples into rate, trend and extremum values;
//! [`format`] decides how a chart period presents them.

pub mod format;
pub mod models;
pub mod report;
pub mod samples;
pub mod stats;

pub use models::{PeriodKind, Sample, StatsConfig, SummaryStats};
pub use stats::{compute, compute_with};
