//! Run reports: per-channel statistics and stage timings, serializable to
//! JSON for tooling.

pub mod report;
pub mod timing;

pub use report::{ChannelStats, FilterReport};
pub use timing::{elapsed_ms, Stage, StageTiming, TimingBreakdown};
