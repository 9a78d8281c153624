use serde::{Deserialize, Serialize};

use crate::model::{MeasurementFrequency, MethodKind};

/// One quarter of an indicator's breakdown table. Independent of the
/// yearly score; `rate` never feeds back into the rollups.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuarterRow {
    pub indicator_id: i64,
    pub quarter: u8,
    pub target: f64,
    pub actual: f64,
    pub rate: f64,
}

/// Per-quarter targets for one indicator. Explicit targets win when any
/// is set non-zero; otherwise the yearly target is split — cumulative
/// kinds get cumulative fractions (25/50/75/100%), the rest get a flat
/// quarter each.
pub fn quarter_targets(
    yearly_target: f64,
    kind: MethodKind,
    explicit: &[Option<f64>; 4],
) -> [f64; 4] {
    if explicit.iter().any(|t| matches!(t, Some(v) if *v != 0.0)) {
        return [
            explicit[0].unwrap_or(0.0),
            explicit[1].unwrap_or(0.0),
            explicit[2].unwrap_or(0.0),
            explicit[3].unwrap_or(0.0),
        ];
    }
    if kind.is_cumulative() {
        [
            yearly_target * 0.25,
            yearly_target * 0.50,
            yearly_target * 0.75,
            yearly_target,
        ]
    } else {
        [yearly_target * 0.25; 4]
    }
}

/// Maps a period index to a quarter slot (0..4) for the given
/// measurement frequency. Out-of-range indices map to `None`.
pub fn quarter_of(frequency: MeasurementFrequency, period_index: u32) -> Option<usize> {
    match frequency {
        MeasurementFrequency::Monthly => match period_index {
            1..=12 => Some((period_index as usize - 1) / 3),
            _ => None,
        },
        MeasurementFrequency::Quarterly => match period_index {
            1..=4 => Some(period_index as usize - 1),
            _ => None,
        },
        MeasurementFrequency::SemiAnnual => match period_index {
            1 => Some(1),
            2 => Some(3),
            _ => None,
        },
        MeasurementFrequency::Annual => match period_index {
            1 => Some(3),
            _ => None,
        },
    }
}

/// Quarter actuals per the method's semantics, from values already
/// bucketed by quarter (each bucket in period order):
/// cumulative kinds report the achieved value through each quarter,
/// average kinds the in-quarter mean, standard the latest value seen so
/// far.
pub fn quarter_actuals(kind: MethodKind, baseline: f64, buckets: &[Vec<f64>; 4]) -> [f64; 4] {
    let mut actuals = [0.0f64; 4];
    match kind {
        MethodKind::CumulativeIncreasing | MethodKind::CumulativeDecreasing => {
            let mut running = baseline;
            for (q, bucket) in buckets.iter().enumerate() {
                let quarter_sum: f64 = bucket.iter().sum();
                if kind == MethodKind::CumulativeIncreasing {
                    running += quarter_sum;
                } else {
                    running -= quarter_sum;
                }
                actuals[q] = running;
            }
        }
        MethodKind::AverageIncreasing | MethodKind::AverageDecreasing => {
            for (q, bucket) in buckets.iter().enumerate() {
                if !bucket.is_empty() {
                    actuals[q] = bucket.iter().sum::<f64>() / bucket.len() as f64;
                }
            }
        }
        MethodKind::Standard => {
            let mut latest = 0.0;
            for (q, bucket) in buckets.iter().enumerate() {
                if let Some(&last) = bucket.last() {
                    latest = last;
                }
                actuals[q] = latest;
            }
        }
    }
    actuals
}

/// Achievement rate of one quarter; a zero target rates 0 rather than
/// dividing by zero.
pub fn quarter_rate(actual: f64, target: f64) -> f64 {
    if target == 0.0 {
        0.0
    } else {
        actual / target * 100.0
    }
}
