use super::timing::TimingBreakdown;
use crate::edges::EdgeOptions;
use crate::image::{Channel, GrayImageU8};
use serde::Serialize;

/// Summary statistics of one filtered channel.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStats {
    pub channel: Channel,
    pub mean: f64,
    pub max: u8,
    /// Pixels clipped to 255.
    pub saturated: usize,
}

impl ChannelStats {
    pub fn from_plane(channel: Channel, plane: &GrayImageU8) -> Self {
        let data = plane.data();
        let sum: u64 = data.iter().map(|&v| u64::from(v)).sum();
        Self {
            channel,
            mean: sum as f64 / data.len().max(1) as f64,
            max: data.iter().copied().max().unwrap_or(0),
            saturated: data.iter().filter(|&&v| v == u8::MAX).count(),
        }
    }
}

/// Report emitted alongside a filtered image.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterReport {
    pub width: usize,
    pub height: usize,
    pub parallel: bool,
    pub edge: EdgeOptions,
    pub channels: Vec<ChannelStats>,
    pub timing: TimingBreakdown,
}
