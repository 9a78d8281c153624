use serde_json::Value;
use strata_kpi::ctx::EvalOptions;
use strata_kpi::evaluate;
use strata_kpi::model::{
    ApprovalStatus, CalculationMethod, Goal, Indicator, Measurement, MeasurementFrequency,
    Objective, Plan, PlanSnapshot,
};
use strata_kpi::report::build_report;

const YEAR: i32 = 2025;

fn snapshot() -> PlanSnapshot {
    PlanSnapshot {
        plan: Plan {
            id: 1,
            name: "plan".to_string(),
            start_year: 2024,
            end_year: 2028,
        },
        objectives: vec![Objective {
            id: 10,
            plan_id: 1,
            name: "objective".to_string(),
        }],
        goals: vec![Goal {
            id: 100,
            objective_id: 10,
            name: "goal".to_string(),
            department_id: Some(7),
        }],
        indicators: vec![Indicator {
            id: 1000,
            goal_id: 100,
            code: "IND-1000".to_string(),
            name: "indicator".to_string(),
            unit: "count".to_string(),
            method: CalculationMethod::Cumulative,
            baseline_value: 1000.0,
            target_value: Some(1200.0),
            impact_weight: Some(100.0),
            frequency: MeasurementFrequency::Quarterly,
        }],
        measurements: vec![
            Measurement {
                indicator_id: 1000,
                period_year: YEAR,
                period_index: 1,
                value: 50.0,
                status: ApprovalStatus::Approved,
            },
            Measurement {
                indicator_id: 1000,
                period_year: YEAR,
                period_index: 2,
                value: 100.0,
                status: ApprovalStatus::Approved,
            },
        ],
        year_targets: Vec::new(),
    }
}

#[test]
fn report_document_shape() {
    let ctx = evaluate(snapshot(), EvalOptions { year: YEAR }).unwrap();
    let report = build_report(&ctx).unwrap();
    let json: Value = serde_json::to_value(&report).unwrap();

    assert_eq!(json["tool"], "strata-kpi");
    assert_eq!(json["schema_version"], "v1");
    assert_eq!(json["fiscal_year"], 2025);

    let plan = &json["plan"];
    assert_eq!(plan["id"], 1);
    let indicator = &plan["objectives"][0]["goals"][0]["indicators"][0];
    assert_eq!(indicator["id"], 1000);
    assert_eq!(indicator["method"], "cumulative");
    // sum 150 against span 200
    assert_eq!(indicator["progress"], 75.0);
    assert_eq!(indicator["band"], "good");
    assert_eq!(indicator["achieved"], 1150.0);

    assert_eq!(json["band_stats"]["total"], 1);
    assert_eq!(json["band_stats"]["good"], 1);
    assert_eq!(json["department_stats"][0]["department_id"], 7);
    assert_eq!(json["quarters"].as_array().unwrap().len(), 4);
}

#[test]
fn report_round_trips() {
    let ctx = evaluate(snapshot(), EvalOptions { year: YEAR }).unwrap();
    let report = build_report(&ctx).unwrap();
    let text = serde_json::to_string(&report).unwrap();
    let back: strata_kpi::schema::v1::PerformanceReportV1 = serde_json::from_str(&text).unwrap();
    assert_eq!(back.plan.objectives.len(), 1);
    assert_eq!(back.band_stats, report.band_stats);
}

#[test]
fn report_requires_a_finished_evaluation() {
    let ctx = strata_kpi::EvalCtx::new(snapshot(), EvalOptions { year: YEAR });
    assert!(build_report(&ctx).is_err());
}
