use crate::math::stats::{mean, weighted_mean};

/// Ceiling applied to each indicator's contribution inside a goal's
/// average, so a single 1,000% outlier cannot dominate it. Band
/// classification always sees the uncapped percentage.
pub const ROLLUP_CONTRIBUTION_CAP: f64 = 200.0;

/// One indicator's view from its goal: scored progress, declared impact
/// weight, and whether it participates in the average at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedScore {
    pub progress: f64,
    pub weight: Option<f64>,
    pub eligible: bool,
}

/// Weighted average of a goal's indicator scores.
///
/// Ineligible indicators are dropped from the average (they still count
/// in band stats). Weights are normalized by their own sum, so weights
/// not summing to 100 still split the goal proportionally; when no
/// usable weight exists the eligible indicators share equally. Negative
/// weights count as 0. Zero eligible indicators score 0.
pub fn goal_progress(scores: &[WeightedScore]) -> f64 {
    let eligible: Vec<&WeightedScore> = scores.iter().filter(|s| s.eligible).collect();
    if eligible.is_empty() {
        return 0.0;
    }

    let capped: Vec<f64> = eligible
        .iter()
        .map(|s| s.progress.min(ROLLUP_CONTRIBUTION_CAP))
        .collect();
    let weights: Vec<Option<f64>> = eligible
        .iter()
        .map(|s| s.weight.map(|w| w.max(0.0)))
        .collect();

    let weight_sum: f64 = weights.iter().flatten().sum();
    if weight_sum <= 0.0 {
        return mean(&capped);
    }

    // An eligible indicator with no declared weight contributes weight 0.
    let pairs: Vec<(f64, f64)> = capped
        .into_iter()
        .zip(weights.into_iter().map(|w| w.unwrap_or(0.0)))
        .collect();
    weighted_mean(&pairs)
}

/// Unweighted mean of a level's child scores; empty scores 0. Used for
/// objective (over goals) and plan (over objectives) rollups — goals
/// with no indicators stay in at score 0.
pub fn level_progress(child_scores: &[f64]) -> f64 {
    mean(child_scores)
}
