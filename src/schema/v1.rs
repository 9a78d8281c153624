use serde::{Deserialize, Serialize};

use crate::model::CalculationMethod;
use crate::score::band::PerformanceBand;
use crate::score::quarters::QuarterRow;
use crate::score::stats::BandStats;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorBlock {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub unit: String,
    pub method: CalculationMethod,
    pub progress: f64,
    pub band: PerformanceBand,
    pub achieved: f64,
    pub target: Option<f64>,
    pub baseline: f64,
    pub periods: u64,
    pub weight: Option<f64>,
    pub eligible: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalBlock {
    pub id: i64,
    pub name: String,
    pub department_id: Option<i64>,
    pub progress: f64,
    pub band: PerformanceBand,
    pub indicators: Vec<IndicatorBlock>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectiveBlock {
    pub id: i64,
    pub name: String,
    pub progress: f64,
    pub band: PerformanceBand,
    pub goals: Vec<GoalBlock>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanBlock {
    pub id: i64,
    pub name: String,
    pub start_year: i32,
    pub end_year: i32,
    pub progress: f64,
    pub band: PerformanceBand,
    pub objectives: Vec<ObjectiveBlock>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentStatsRow {
    pub department_id: i64,
    pub stats: BandStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceReportV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub fiscal_year: i32,
    pub plan: PlanBlock,
    pub band_stats: BandStats,
    pub department_stats: Vec<DepartmentStatsRow>,
    pub quarters: Vec<QuarterRow>,
    pub warnings: Vec<String>,
}
