use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Stages of an `EdgePipeline::run_file` call, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Read,
    Filter,
    Write,
}

/// Wall-clock time spent in one stage.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub stage: Stage,
    pub elapsed_ms: f64,
}

/// Stage timings of one pipeline run. `total_ms` spans the whole run,
/// including time between stages; `stages` are listed in execution order.
/// `process_with_diagnostics` only records `Filter`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, stage: Stage, elapsed_ms: f64) {
        self.stages.push(StageTiming { stage, elapsed_ms });
    }

    /// Record `Read` ahead of the stages that followed it.
    pub fn prepend_read(&mut self, elapsed_ms: f64) {
        self.stages.insert(
            0,
            StageTiming {
                stage: Stage::Read,
                elapsed_ms,
            },
        );
    }

    pub fn stage_ms(&self, stage: Stage) -> Option<f64> {
        self.stages
            .iter()
            .find(|s| s.stage == stage)
            .map(|s| s.elapsed_ms)
    }
}

#[inline]
pub fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
