use strata_kpi::score::rollup::{goal_progress, level_progress, WeightedScore};

fn scored(progress: f64, weight: Option<f64>) -> WeightedScore {
    WeightedScore {
        progress,
        weight,
        eligible: true,
    }
}

#[test]
fn weighted_goal_average() {
    let goal = goal_progress(&[scored(100.0, Some(60.0)), scored(50.0, Some(40.0))]);
    assert!((goal - 80.0).abs() < 1e-9);
}

#[test]
fn equal_weight_fallback() {
    let goal = goal_progress(&[scored(100.0, None), scored(50.0, None)]);
    assert!((goal - 75.0).abs() < 1e-9);
}

#[test]
fn weights_not_summing_to_100_are_normalized() {
    let goal = goal_progress(&[scored(100.0, Some(30.0)), scored(50.0, Some(20.0))]);
    assert!((goal - 80.0).abs() < 1e-9);
}

#[test]
fn zero_weight_sum_falls_back_to_mean() {
    let goal = goal_progress(&[scored(100.0, Some(0.0)), scored(50.0, Some(0.0))]);
    assert!((goal - 75.0).abs() < 1e-9);
}

#[test]
fn absent_weight_among_present_contributes_zero() {
    let goal = goal_progress(&[scored(100.0, Some(50.0)), scored(10.0, None)]);
    assert!((goal - 100.0).abs() < 1e-9);
}

#[test]
fn negative_weight_counts_as_zero() {
    let goal = goal_progress(&[scored(100.0, Some(50.0)), scored(10.0, Some(-20.0))]);
    assert!((goal - 100.0).abs() < 1e-9);
}

#[test]
fn ineligible_indicators_are_excluded() {
    let goal = goal_progress(&[
        scored(100.0, Some(60.0)),
        WeightedScore {
            progress: 0.0,
            weight: Some(40.0),
            eligible: false,
        },
    ]);
    assert!((goal - 100.0).abs() < 1e-9);
}

#[test]
fn outliers_capped_at_200_inside_average() {
    let goal = goal_progress(&[scored(1000.0, None), scored(50.0, None)]);
    assert!((goal - 125.0).abs() < 1e-9);

    let goal = goal_progress(&[scored(1000.0, Some(60.0)), scored(50.0, Some(40.0))]);
    assert!((goal - (0.6 * 200.0 + 0.4 * 50.0)).abs() < 1e-9);
}

#[test]
fn negative_progress_is_not_floored() {
    let goal = goal_progress(&[scored(-50.0, None), scored(50.0, None)]);
    assert!((goal - 0.0).abs() < 1e-9);
}

#[test]
fn empty_goal_scores_zero() {
    assert_eq!(goal_progress(&[]), 0.0);
    let goal = goal_progress(&[WeightedScore {
        progress: 42.0,
        weight: None,
        eligible: false,
    }]);
    assert_eq!(goal, 0.0);
}

#[test]
fn level_means() {
    assert!((level_progress(&[80.0, 60.0, 100.0]) - 80.0).abs() < 1e-9);
    assert_eq!(level_progress(&[]), 0.0);
    // a zero-scored child stays in the mean
    assert!((level_progress(&[80.0, 0.0]) - 40.0).abs() < 1e-9);
}
