use anyhow::Result;
use tracing::info;

use crate::ctx::EvalCtx;
use crate::eval::Stage;
use crate::score::rollup::level_progress;
use crate::score::PerformanceResult;

pub struct Stage3Objectives;

impl Stage3Objectives {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Objectives {
    fn name(&self) -> &'static str {
        "stage3_objectives"
    }

    fn run(&self, ctx: &mut EvalCtx) -> Result<()> {
        let mut results = Vec::with_capacity(ctx.snapshot.objectives.len());

        for objective in &ctx.snapshot.objectives {
            let mut goal_scores = Vec::new();
            for goal in ctx
                .snapshot
                .goals
                .iter()
                .filter(|g| g.objective_id == objective.id)
            {
                goal_scores.push(ctx.goal_result(goal.id)?.progress);
            }
            let progress = level_progress(&goal_scores);
            results.push((objective.id, PerformanceResult::from_progress(progress)));
        }

        ctx.objective_results.extend(results);
        info!(objectives = ctx.objective_results.len(), "objective_scores_ready");
        Ok(())
    }
}
