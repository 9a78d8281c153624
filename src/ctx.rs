use std::collections::BTreeMap;

use anyhow::{Context, Result};

use crate::model::{ApprovalStatus, Goal, Indicator, PlanSnapshot, YearTarget};
use crate::score::indicator::IndicatorScore;
use crate::score::quarters::QuarterRow;
use crate::score::stats::BandStats;
use crate::score::PerformanceResult;

#[derive(Debug, Clone, Copy)]
pub struct EvalOptions {
    /// Fiscal year being scored; selects measurements and year overrides.
    pub year: i32,
}

/// One indicator's full outcome, including the inputs the score was
/// anchored on (after year-override resolution) for drill-down tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorOutcome {
    pub score: IndicatorScore,
    pub target_used: Option<f64>,
    pub baseline_used: f64,
    pub weight: Option<f64>,
}

/// Per-computation context: the immutable snapshot plus every result a
/// stage has produced so far. Created fresh per request, discarded after.
#[derive(Debug)]
pub struct EvalCtx {
    pub snapshot: PlanSnapshot,
    pub options: EvalOptions,
    pub indicator_results: BTreeMap<i64, IndicatorOutcome>,
    pub goal_results: BTreeMap<i64, PerformanceResult>,
    pub objective_results: BTreeMap<i64, PerformanceResult>,
    pub plan_result: Option<PerformanceResult>,
    pub band_stats: BandStats,
    pub department_stats: BTreeMap<i64, BandStats>,
    pub quarter_rows: Vec<QuarterRow>,
    pub warnings: Vec<String>,
}

impl EvalCtx {
    pub fn new(snapshot: PlanSnapshot, options: EvalOptions) -> Self {
        Self {
            snapshot,
            options,
            indicator_results: BTreeMap::new(),
            goal_results: BTreeMap::new(),
            objective_results: BTreeMap::new(),
            plan_result: None,
            band_stats: BandStats::default(),
            department_stats: BTreeMap::new(),
            quarter_rows: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Year-override record for an indicator, if one exists for the
    /// evaluated year.
    pub fn year_target(&self, indicator_id: i64) -> Option<&YearTarget> {
        self.snapshot
            .year_targets
            .iter()
            .find(|t| t.indicator_id == indicator_id && t.year == self.options.year)
    }

    pub fn effective_target(&self, indicator: &Indicator) -> Option<f64> {
        self.year_target(indicator.id)
            .and_then(|t| t.target_value)
            .or(indicator.target_value)
    }

    pub fn effective_baseline(&self, indicator: &Indicator) -> f64 {
        self.year_target(indicator.id)
            .and_then(|t| t.baseline_value)
            .unwrap_or(indicator.baseline_value)
    }

    /// Approved measurements of one indicator for the evaluated year as
    /// `(period_index, value)`, ordered by period. Non-approved entries
    /// never reach the scoring math.
    pub fn approved_values(&self, indicator_id: i64) -> Vec<(u32, f64)> {
        let mut values: Vec<(u32, f64)> = self
            .snapshot
            .measurements
            .iter()
            .filter(|m| {
                m.indicator_id == indicator_id
                    && m.period_year == self.options.year
                    && m.status == ApprovalStatus::Approved
            })
            .map(|m| (m.period_index, m.value))
            .collect();
        values.sort_by_key(|&(period, _)| period);
        values
    }

    pub fn goal(&self, goal_id: i64) -> Option<&Goal> {
        self.snapshot.goals.iter().find(|g| g.id == goal_id)
    }

    pub fn indicator_result(&self, indicator_id: i64) -> Result<&IndicatorOutcome> {
        self.indicator_results
            .get(&indicator_id)
            .with_context(|| format!("indicator result missing: {indicator_id}"))
    }

    pub fn goal_result(&self, goal_id: i64) -> Result<&PerformanceResult> {
        self.goal_results
            .get(&goal_id)
            .with_context(|| format!("goal result missing: {goal_id}"))
    }

    pub fn objective_result(&self, objective_id: i64) -> Result<&PerformanceResult> {
        self.objective_results
            .get(&objective_id)
            .with_context(|| format!("objective result missing: {objective_id}"))
    }
}
