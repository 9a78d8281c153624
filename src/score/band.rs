use serde::{Deserialize, Serialize};

/// Six exhaustive performance tiers over a progress percentage,
/// lower bound inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceBand {
    ExceedingTarget,
    Excellent,
    Good,
    Moderate,
    Weak,
    VeryWeak,
}

impl PerformanceBand {
    /// Total over every `f64`: negatives and NaN land in `VeryWeak`.
    pub fn classify(progress: f64) -> Self {
        if progress >= 115.0 {
            Self::ExceedingTarget
        } else if progress >= 85.0 {
            Self::Excellent
        } else if progress >= 70.0 {
            Self::Good
        } else if progress >= 55.0 {
            Self::Moderate
        } else if progress >= 45.0 {
            Self::Weak
        } else {
            Self::VeryWeak
        }
    }
}
