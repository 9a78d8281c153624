use anyhow::{Context, Result};

use crate::ctx::EvalCtx;
use crate::schema::v1::{
    DepartmentStatsRow, GoalBlock, IndicatorBlock, ObjectiveBlock, PerformanceReportV1, PlanBlock,
};

/// Assembles the v1 report document from a fully evaluated context.
/// Plain data only; serialization and rendering are the caller's job.
pub fn build_report(ctx: &EvalCtx) -> Result<PerformanceReportV1> {
    let plan_result = ctx.plan_result.as_ref().context("plan result missing")?;

    let mut objectives: Vec<_> = ctx.snapshot.objectives.iter().collect();
    objectives.sort_by_key(|o| o.id);

    let mut objective_blocks = Vec::with_capacity(objectives.len());
    for objective in objectives {
        let mut goals: Vec<_> = ctx
            .snapshot
            .goals
            .iter()
            .filter(|g| g.objective_id == objective.id)
            .collect();
        goals.sort_by_key(|g| g.id);

        let mut goal_blocks = Vec::with_capacity(goals.len());
        for goal in goals {
            let mut indicators: Vec<_> = ctx
                .snapshot
                .indicators
                .iter()
                .filter(|i| i.goal_id == goal.id)
                .collect();
            indicators.sort_by_key(|i| i.id);

            let mut indicator_blocks = Vec::with_capacity(indicators.len());
            for indicator in indicators {
                let outcome = ctx.indicator_result(indicator.id)?;
                indicator_blocks.push(IndicatorBlock {
                    id: indicator.id,
                    code: indicator.code.clone(),
                    name: indicator.name.clone(),
                    unit: indicator.unit.clone(),
                    method: indicator.method,
                    progress: outcome.score.progress,
                    band: outcome.score.band,
                    achieved: outcome.score.achieved,
                    target: outcome.target_used,
                    baseline: outcome.baseline_used,
                    periods: outcome.score.periods as u64,
                    weight: outcome.weight,
                    eligible: outcome.score.eligible,
                });
            }

            let goal_result = ctx.goal_result(goal.id)?;
            goal_blocks.push(GoalBlock {
                id: goal.id,
                name: goal.name.clone(),
                department_id: goal.department_id,
                progress: goal_result.progress,
                band: goal_result.band,
                indicators: indicator_blocks,
            });
        }

        let objective_result = ctx.objective_result(objective.id)?;
        objective_blocks.push(ObjectiveBlock {
            id: objective.id,
            name: objective.name.clone(),
            progress: objective_result.progress,
            band: objective_result.band,
            goals: goal_blocks,
        });
    }

    let plan = &ctx.snapshot.plan;
    Ok(PerformanceReportV1 {
        tool: "strata-kpi".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        schema_version: "v1".to_string(),
        fiscal_year: ctx.options.year,
        plan: PlanBlock {
            id: plan.id,
            name: plan.name.clone(),
            start_year: plan.start_year,
            end_year: plan.end_year,
            progress: plan_result.progress,
            band: plan_result.band,
            objectives: objective_blocks,
        },
        band_stats: ctx.band_stats,
        department_stats: ctx
            .department_stats
            .iter()
            .map(|(&department_id, &stats)| DepartmentStatsRow {
                department_id,
                stats,
            })
            .collect(),
        quarters: ctx.quarter_rows.clone(),
        warnings: ctx.warnings.clone(),
    })
}
