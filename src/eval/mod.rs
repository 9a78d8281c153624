use anyhow::Result;
use std::time::Instant;
use tracing::{info, warn};

use crate::ctx::{EvalCtx, EvalOptions};
use crate::model::PlanSnapshot;

pub mod stage1_indicators;
pub mod stage2_goals;
pub mod stage3_objectives;
pub mod stage4_plan;
pub mod stage5_stats;
pub mod stage6_quarters;

pub trait Stage {
    fn name(&self) -> &'static str;
    fn run(&self, ctx: &mut EvalCtx) -> Result<()>;
}

pub struct Evaluator {
    stages: Vec<Box<dyn Stage>>,
}

impl Evaluator {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// The full scoring pass: indicators, goal/objective/plan rollups,
    /// band stats, quarterly breakdown.
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(stage1_indicators::Stage1Indicators::new()),
            Box::new(stage2_goals::Stage2Goals::new()),
            Box::new(stage3_objectives::Stage3Objectives::new()),
            Box::new(stage4_plan::Stage4Plan::new()),
            Box::new(stage5_stats::Stage5Stats::new()),
            Box::new(stage6_quarters::Stage6Quarters::new()),
        ])
    }

    pub fn run(&self, ctx: &mut EvalCtx) -> Result<()> {
        for stage in &self.stages {
            let start = Instant::now();
            info!(stage = stage.name(), "stage started");
            if let Err(err) = stage.run(ctx) {
                let elapsed_ms = start.elapsed().as_millis();
                warn!(
                    stage = stage.name(),
                    elapsed_ms = elapsed_ms as u64,
                    "stage failed"
                );
                return Err(err);
            }
            let elapsed_ms = start.elapsed().as_millis();
            info!(
                stage = stage.name(),
                elapsed_ms = elapsed_ms as u64,
                "stage finished"
            );
        }
        Ok(())
    }
}

/// Scores a snapshot for one fiscal year and returns the populated
/// context. Convenience over [`Evaluator::standard`].
pub fn evaluate(snapshot: PlanSnapshot, options: EvalOptions) -> Result<EvalCtx> {
    let mut ctx = EvalCtx::new(snapshot, options);
    Evaluator::standard().run(&mut ctx)?;
    Ok(ctx)
}
