use anyhow::Result;
use tracing::info;

use crate::ctx::EvalCtx;
use crate::eval::Stage;
use crate::score::rollup::level_progress;
use crate::score::PerformanceResult;

pub struct Stage4Plan;

impl Stage4Plan {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Plan {
    fn name(&self) -> &'static str {
        "stage4_plan"
    }

    fn run(&self, ctx: &mut EvalCtx) -> Result<()> {
        let mut objective_scores = Vec::with_capacity(ctx.snapshot.objectives.len());
        for objective in &ctx.snapshot.objectives {
            objective_scores.push(ctx.objective_result(objective.id)?.progress);
        }
        let progress = level_progress(&objective_scores);
        ctx.plan_result = Some(PerformanceResult::from_progress(progress));
        info!(progress, "plan_score_ready");
        Ok(())
    }
}
