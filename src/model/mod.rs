use serde::{Deserialize, Serialize};

pub mod method;

pub use self::method::{CalculationMethod, MethodKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    Draft,
    Submitted,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementFrequency {
    Monthly,
    Quarterly,
    SemiAnnual,
    Annual,
}

impl MeasurementFrequency {
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Self::Monthly => 12,
            Self::Quarterly => 4,
            Self::SemiAnnual => 2,
            Self::Annual => 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Indicator {
    pub id: i64,
    pub goal_id: i64,
    pub code: String,
    pub name: String,
    pub unit: String,
    pub method: CalculationMethod,
    pub baseline_value: f64,
    pub target_value: Option<f64>,
    pub impact_weight: Option<f64>,
    pub frequency: MeasurementFrequency,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measurement {
    pub indicator_id: i64,
    pub period_year: i32,
    pub period_index: u32,
    pub value: f64,
    pub status: ApprovalStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub objective_id: i64,
    pub name: String,
    pub department_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Objective {
    pub id: i64,
    pub plan_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub id: i64,
    pub name: String,
    pub start_year: i32,
    pub end_year: i32,
}

/// Per-year override record. When present for the evaluated year, its
/// target/baseline take precedence over the indicator's static fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearTarget {
    pub indicator_id: i64,
    pub year: i32,
    pub target_value: Option<f64>,
    pub baseline_value: Option<f64>,
    pub quarter_targets: [Option<f64>; 4],
}

/// Immutable input bundle for one computation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSnapshot {
    pub plan: Plan,
    pub objectives: Vec<Objective>,
    pub goals: Vec<Goal>,
    pub indicators: Vec<Indicator>,
    pub measurements: Vec<Measurement>,
    pub year_targets: Vec<YearTarget>,
}
