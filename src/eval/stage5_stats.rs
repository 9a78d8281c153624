use std::collections::BTreeMap;

use anyhow::Result;
use tracing::info;

use crate::ctx::EvalCtx;
use crate::eval::Stage;
use crate::score::stats::BandStats;

pub struct Stage5Stats;

impl Stage5Stats {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Stats {
    fn name(&self) -> &'static str {
        "stage5_stats"
    }

    fn run(&self, ctx: &mut EvalCtx) -> Result<()> {
        let mut overall = BandStats::default();
        let mut per_department: BTreeMap<i64, BandStats> = BTreeMap::new();

        // Every indicator counts here, eligible for rollups or not;
        // the recorded band comes from the uncapped percentage.
        for indicator in &ctx.snapshot.indicators {
            let band = ctx.indicator_result(indicator.id)?.score.band;
            overall.record(band);
            let department = ctx.goal(indicator.goal_id).and_then(|g| g.department_id);
            if let Some(department_id) = department {
                per_department.entry(department_id).or_default().record(band);
            }
        }

        ctx.band_stats = overall;
        ctx.department_stats = per_department;
        info!(
            total = ctx.band_stats.total,
            departments = ctx.department_stats.len(),
            "band_stats_ready"
        );
        Ok(())
    }
}
