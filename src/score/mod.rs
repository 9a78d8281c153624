use serde::{Deserialize, Serialize};

pub mod band;
pub mod indicator;
pub mod quarters;
pub mod rollup;
pub mod stats;

use self::band::PerformanceBand;

/// Score of one node in the hierarchy: a progress percentage plus its band.
/// Produced per indicator, per goal, per objective and per plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceResult {
    pub progress: f64,
    pub band: PerformanceBand,
}

impl PerformanceResult {
    pub fn from_progress(progress: f64) -> Self {
        Self {
            progress,
            band: PerformanceBand::classify(progress),
        }
    }
}
