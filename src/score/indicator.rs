use crate::model::MethodKind;
use crate::score::band::PerformanceBand;

/// One indicator reduced to a yearly score.
///
/// `progress` is uncapped: values above 100 are meaningful
/// over-achievement and feed the band classification as-is. The 200
/// ceiling exists only inside rollup averaging (`rollup` module).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorScore {
    pub progress: f64,
    pub band: PerformanceBand,
    pub achieved: f64,
    pub periods: usize,
    /// Participates in its goal's weighted average. False when the
    /// target is unusable or no approved measurement exists; such
    /// indicators still count in band stats as classified.
    pub eligible: bool,
}

/// Scores one indicator for one year. `values` are the approved
/// measurements `(period_index, value)`, ordered by period.
///
/// Degenerate inputs degrade instead of failing: unusable target or
/// zero eligible periods score progress 0 (`VeryWeak`), division-by-zero
/// paths score 0.
pub fn score_indicator(
    kind: MethodKind,
    baseline: f64,
    target: Option<f64>,
    values: &[(u32, f64)],
) -> IndicatorScore {
    let sum: f64 = values.iter().map(|(_, v)| v).sum();
    let count = values.len();
    let average = if count > 0 { sum / count as f64 } else { 0.0 };
    // Ordered by period, so the last entry is the latest one.
    let latest = values.last().map(|&(_, v)| v).unwrap_or(0.0);

    let achieved = match kind {
        MethodKind::CumulativeIncreasing => baseline + sum,
        MethodKind::CumulativeDecreasing => baseline - sum,
        MethodKind::AverageIncreasing | MethodKind::AverageDecreasing => average,
        MethodKind::Standard => latest,
    };

    let usable = kind.target_usable(target);
    let progress = if !usable || count == 0 {
        0.0
    } else {
        let target = target.unwrap_or(0.0);
        match kind {
            MethodKind::CumulativeIncreasing => {
                if target == baseline {
                    if achieved > 0.0 {
                        100.0
                    } else {
                        0.0
                    }
                } else {
                    sum / (target - baseline) * 100.0
                }
            }
            MethodKind::CumulativeDecreasing => {
                if target == baseline {
                    if achieved > 0.0 {
                        100.0
                    } else {
                        0.0
                    }
                } else {
                    -sum / (target - baseline) * 100.0
                }
            }
            MethodKind::AverageIncreasing => average / target * 100.0,
            MethodKind::AverageDecreasing => {
                if average == 0.0 {
                    0.0
                } else {
                    target / average * 100.0
                }
            }
            MethodKind::Standard => latest / target * 100.0,
        }
    };

    IndicatorScore {
        progress,
        band: PerformanceBand::classify(progress),
        achieved,
        periods: count,
        eligible: usable && count > 0,
    }
}
