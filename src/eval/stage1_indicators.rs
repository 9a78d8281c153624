use std::collections::BTreeSet;

use anyhow::{bail, Result};
use tracing::info;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::ctx::{EvalCtx, IndicatorOutcome};
use crate::eval::Stage;
use crate::model::MethodKind;
use crate::score::indicator::{score_indicator, IndicatorScore};

pub struct Stage1Indicators;

impl Stage1Indicators {
    pub fn new() -> Self {
        Self
    }
}

struct Job {
    id: i64,
    kind: MethodKind,
    baseline: f64,
    target: Option<f64>,
    weight: Option<f64>,
    values: Vec<(u32, f64)>,
}

fn score_job(job: Job) -> (i64, IndicatorOutcome) {
    let score: IndicatorScore = score_indicator(job.kind, job.baseline, job.target, &job.values);
    (
        job.id,
        IndicatorOutcome {
            score,
            target_used: job.target,
            baseline_used: job.baseline,
            weight: job.weight,
        },
    )
}

fn validate_snapshot(ctx: &EvalCtx) -> Result<()> {
    let plan_id = ctx.snapshot.plan.id;
    for objective in &ctx.snapshot.objectives {
        if objective.plan_id != plan_id {
            bail!(
                "objective {} references plan {}, snapshot plan is {}",
                objective.id,
                objective.plan_id,
                plan_id
            );
        }
    }
    let objective_ids: BTreeSet<i64> = ctx.snapshot.objectives.iter().map(|o| o.id).collect();
    for goal in &ctx.snapshot.goals {
        if !objective_ids.contains(&goal.objective_id) {
            bail!("goal {} references unknown objective {}", goal.id, goal.objective_id);
        }
    }
    let goal_ids: BTreeSet<i64> = ctx.snapshot.goals.iter().map(|g| g.id).collect();
    for indicator in &ctx.snapshot.indicators {
        if !goal_ids.contains(&indicator.goal_id) {
            bail!(
                "indicator {} references unknown goal {}",
                indicator.id,
                indicator.goal_id
            );
        }
    }
    for m in &ctx.snapshot.measurements {
        if !m.value.is_finite() {
            bail!(
                "indicator {}: non-finite measurement value in year {} period {}",
                m.indicator_id,
                m.period_year,
                m.period_index
            );
        }
    }
    Ok(())
}

impl Stage for Stage1Indicators {
    fn name(&self) -> &'static str {
        "stage1_indicators"
    }

    fn run(&self, ctx: &mut EvalCtx) -> Result<()> {
        validate_snapshot(ctx)?;

        let jobs: Vec<Job> = ctx
            .snapshot
            .indicators
            .iter()
            .map(|ind| Job {
                id: ind.id,
                kind: ind.method.kind(),
                baseline: ctx.effective_baseline(ind),
                target: ctx.effective_target(ind),
                weight: ind.impact_weight,
                values: ctx.approved_values(ind.id),
            })
            .collect();

        // Results land in a BTreeMap, so the outcome is identical with
        // and without the parallel feature.
        #[cfg(feature = "parallel")]
        let scored: Vec<(i64, IndicatorOutcome)> = jobs.into_par_iter().map(score_job).collect();
        #[cfg(not(feature = "parallel"))]
        let scored: Vec<(i64, IndicatorOutcome)> = jobs.into_iter().map(score_job).collect();

        ctx.indicator_results.extend(scored);

        let mut warnings = Vec::new();
        for (id, outcome) in &ctx.indicator_results {
            let usable = ctx
                .snapshot
                .indicators
                .iter()
                .find(|i| i.id == *id)
                .map(|i| i.method.kind().target_usable(outcome.target_used))
                .unwrap_or(false);
            if !usable {
                warnings.push(format!("indicator {id}: no usable target, excluded from rollups"));
            } else if outcome.score.periods == 0 {
                warnings.push(format!(
                    "indicator {id}: no approved measurements for {}",
                    ctx.options.year
                ));
            }
        }
        ctx.warnings.extend(warnings);

        info!(indicators = ctx.indicator_results.len(), "indicator_scores_ready");
        Ok(())
    }
}
