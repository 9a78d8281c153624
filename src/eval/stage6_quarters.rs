use anyhow::Result;
use tracing::info;

use crate::ctx::EvalCtx;
use crate::eval::Stage;
use crate::score::quarters::{quarter_actuals, quarter_of, quarter_rate, quarter_targets, QuarterRow};

pub struct Stage6Quarters;

impl Stage6Quarters {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage6Quarters {
    fn name(&self) -> &'static str {
        "stage6_quarters"
    }

    fn run(&self, ctx: &mut EvalCtx) -> Result<()> {
        let mut indicators: Vec<_> = ctx.snapshot.indicators.iter().collect();
        indicators.sort_by_key(|i| i.id);

        let mut rows = Vec::with_capacity(indicators.len() * 4);
        let mut warnings = Vec::new();

        for indicator in indicators {
            let kind = indicator.method.kind();
            let yearly_target = ctx.effective_target(indicator).unwrap_or(0.0);
            let explicit = ctx
                .year_target(indicator.id)
                .map(|t| t.quarter_targets)
                .unwrap_or([None; 4]);
            let targets = quarter_targets(yearly_target, kind, &explicit);

            let mut buckets: [Vec<f64>; 4] = Default::default();
            for (period, value) in ctx.approved_values(indicator.id) {
                match quarter_of(indicator.frequency, period) {
                    Some(q) => buckets[q].push(value),
                    None => warnings.push(format!(
                        "indicator {}: period index {period} out of range for {:?}, skipped",
                        indicator.id, indicator.frequency
                    )),
                }
            }
            let actuals = quarter_actuals(kind, ctx.effective_baseline(indicator), &buckets);

            for q in 0..4 {
                rows.push(QuarterRow {
                    indicator_id: indicator.id,
                    quarter: q as u8 + 1,
                    target: targets[q],
                    actual: actuals[q],
                    rate: quarter_rate(actuals[q], targets[q]),
                });
            }
        }

        ctx.quarter_rows = rows;
        ctx.warnings.extend(warnings);
        info!(rows = ctx.quarter_rows.len(), "quarter_breakdown_ready");
        Ok(())
    }
}
