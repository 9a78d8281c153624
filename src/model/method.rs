use serde::de::{Deserialize, Deserializer};
use serde::Serialize;
use tracing::warn;

/// Canonical calculation-method tags. Upstream data carries several
/// overlapping tag sets; this enum is the union, one variant per tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMethod {
    Cumulative,
    CumulativeIncreasing,
    Increasing,
    CumulativeDecreasing,
    Decreasing,
    Percentage,
    PercentageIncreasing,
    Maintenance,
    MaintenanceIncreasing,
    PercentageDecreasing,
    MaintenanceDecreasing,
    Standard,
}

/// The five formula families the tags resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    CumulativeIncreasing,
    CumulativeDecreasing,
    AverageIncreasing,
    AverageDecreasing,
    Standard,
}

impl CalculationMethod {
    /// Maps a raw tag to a method. Unrecognized tags fall back to
    /// `CumulativeIncreasing` with a warning; they never fail.
    pub fn parse_tag(tag: &str) -> Self {
        match tag {
            "cumulative" => Self::Cumulative,
            "cumulative_increasing" => Self::CumulativeIncreasing,
            "increasing" => Self::Increasing,
            "cumulative_decreasing" => Self::CumulativeDecreasing,
            "decreasing" => Self::Decreasing,
            "percentage" => Self::Percentage,
            "percentage_increasing" => Self::PercentageIncreasing,
            "maintenance" => Self::Maintenance,
            "maintenance_increasing" => Self::MaintenanceIncreasing,
            "percentage_decreasing" => Self::PercentageDecreasing,
            "maintenance_decreasing" => Self::MaintenanceDecreasing,
            "standard" => Self::Standard,
            other => {
                warn!(tag = other, "unrecognized calculation method tag");
                Self::CumulativeIncreasing
            }
        }
    }

    pub fn kind(&self) -> MethodKind {
        match self {
            Self::Cumulative | Self::CumulativeIncreasing | Self::Increasing => {
                MethodKind::CumulativeIncreasing
            }
            Self::CumulativeDecreasing | Self::Decreasing => MethodKind::CumulativeDecreasing,
            Self::Percentage
            | Self::PercentageIncreasing
            | Self::Maintenance
            | Self::MaintenanceIncreasing => MethodKind::AverageIncreasing,
            Self::PercentageDecreasing | Self::MaintenanceDecreasing => {
                MethodKind::AverageDecreasing
            }
            Self::Standard => MethodKind::Standard,
        }
    }
}

impl<'de> Deserialize<'de> for CalculationMethod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::parse_tag(&tag))
    }
}

impl MethodKind {
    pub fn is_cumulative(&self) -> bool {
        matches!(self, Self::CumulativeIncreasing | Self::CumulativeDecreasing)
    }

    /// Whether a target value can anchor this kind's progress formula.
    /// A zero target is legitimate for the decreasing-cumulative family
    /// (a "reduce to zero" goal); everywhere else it means undefined.
    pub fn target_usable(&self, target: Option<f64>) -> bool {
        match self {
            Self::CumulativeDecreasing => target.is_some(),
            _ => matches!(target, Some(t) if t > 0.0),
        }
    }
}
