use anyhow::Result;
use tracing::info;

use crate::ctx::EvalCtx;
use crate::eval::Stage;
use crate::score::rollup::{goal_progress, WeightedScore};
use crate::score::PerformanceResult;

pub struct Stage2Goals;

impl Stage2Goals {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Goals {
    fn name(&self) -> &'static str {
        "stage2_goals"
    }

    fn run(&self, ctx: &mut EvalCtx) -> Result<()> {
        let mut results = Vec::with_capacity(ctx.snapshot.goals.len());
        let mut warnings = Vec::new();

        for goal in &ctx.snapshot.goals {
            let mut scores = Vec::new();
            for indicator in ctx.snapshot.indicators.iter().filter(|i| i.goal_id == goal.id) {
                let outcome = ctx.indicator_result(indicator.id)?;
                if matches!(outcome.weight, Some(w) if w < 0.0) {
                    warnings.push(format!(
                        "indicator {}: negative impact weight treated as 0",
                        indicator.id
                    ));
                }
                scores.push(WeightedScore {
                    progress: outcome.score.progress,
                    weight: outcome.weight,
                    eligible: outcome.score.eligible,
                });
            }
            let progress = goal_progress(&scores);
            results.push((goal.id, PerformanceResult::from_progress(progress)));
        }

        ctx.goal_results.extend(results);
        ctx.warnings.extend(warnings);
        info!(goals = ctx.goal_results.len(), "goal_scores_ready");
        Ok(())
    }
}
