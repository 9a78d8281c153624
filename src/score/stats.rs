use serde::{Deserialize, Serialize};

use crate::score::band::PerformanceBand;

/// Counts of indicators per performance band. `merge` is element-wise
/// addition, so per-department stats summed equal organization-wide
/// stats computed in one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandStats {
    pub total: u64,
    pub exceeding_target: u64,
    pub excellent: u64,
    pub good: u64,
    pub moderate: u64,
    pub weak: u64,
    pub very_weak: u64,
}

impl BandStats {
    pub fn record(&mut self, band: PerformanceBand) {
        self.total += 1;
        match band {
            PerformanceBand::ExceedingTarget => self.exceeding_target += 1,
            PerformanceBand::Excellent => self.excellent += 1,
            PerformanceBand::Good => self.good += 1,
            PerformanceBand::Moderate => self.moderate += 1,
            PerformanceBand::Weak => self.weak += 1,
            PerformanceBand::VeryWeak => self.very_weak += 1,
        }
    }

    pub fn merge(&mut self, other: &BandStats) {
        self.total += other.total;
        self.exceeding_target += other.exceeding_target;
        self.excellent += other.excellent;
        self.good += other.good;
        self.moderate += other.moderate;
        self.weak += other.weak;
        self.very_weak += other.very_weak;
    }

    pub fn accumulate<I>(bands: I) -> Self
    where
        I: IntoIterator<Item = PerformanceBand>,
    {
        let mut stats = Self::default();
        for band in bands {
            stats.record(band);
        }
        stats
    }
}
