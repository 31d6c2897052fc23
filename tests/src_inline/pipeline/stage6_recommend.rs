use super::*;

use crate::engines::EngineKind;
use crate::pipeline::stage3_aggregate::run_stage3;

fn dims_for(engine: &Engine, samples: &[(f64, usize)]) -> Vec<Dimension> {
    engine
        .dimensions
        .iter()
        .zip(samples)
        .map(|(def, &(score, observations))| Dimension {
            key: def.key,
            label: def.label,
            weight: def.weight,
            target: def.target,
            observations,
            raw: score,
            score,
        })
        .collect()
}

fn recommend(engine: &Engine, dims: &[Dimension]) -> Stage6Output {
    let aggregate = run_stage3(engine, dims);
    run_stage6(engine, dims, aggregate, &ValidatedInput::default())
}

#[test]
fn test_urgent_text_is_appended_last() {
    let engine = Engine::builtin(EngineKind::BurnoutRisk).unwrap();
    let dims = dims_for(&engine, &[(30.0, 1), (30.0, 1), (30.0, 1), (30.0, 1), (30.0, 1)]);
    let output = recommend(&engine, &dims);

    // Outward 70 trips the at-or-above-60 rule after five gap actions.
    assert_eq!(output.recommendations.len(), 6);
    assert_eq!(
        *output.recommendations.last().unwrap(),
        "Burnout risk is critical; intervene this week with workload relief and leadership attention."
    );
}

#[test]
fn test_urgent_not_triggered_below_threshold() {
    let engine = Engine::builtin(EngineKind::BurnoutRisk).unwrap();
    let dims = dims_for(&engine, &[(80.0, 1), (80.0, 1), (80.0, 1), (80.0, 1), (80.0, 1)]);
    let output = recommend(&engine, &dims);
    assert!(output.recommendations.is_empty());
}

#[test]
fn test_below_trigger_fires_on_low_composite() {
    let engine = Engine::builtin(EngineKind::OperationalHealth).unwrap();
    let dims = dims_for(&engine, &[(38.0, 1), (38.0, 1), (38.0, 1), (38.0, 1), (38.0, 1)]);
    let output = recommend(&engine, &dims);

    assert_eq!(output.recommendations.len(), 6);
    assert_eq!(
        *output.recommendations.last().unwrap(),
        "Overall operational health is critical; pause new initiatives and run a stabilization sprint."
    );
}

#[test]
fn test_below_trigger_quiet_at_threshold() {
    let engine = Engine::builtin(EngineKind::OperationalHealth).unwrap();
    let dims = dims_for(&engine, &[(40.0, 1), (40.0, 1), (40.0, 1), (40.0, 1), (40.0, 1)]);
    let output = recommend(&engine, &dims);

    // Exactly 40 does not fire a strictly-below rule.
    assert_eq!(output.recommendations.len(), 5);
}

#[test]
fn test_advice_ordered_by_priority() {
    let engine = Engine::builtin(EngineKind::GovernanceMaturity).unwrap();
    let dims = dims_for(&engine, &[(60.0, 1), (40.0, 1), (80.0, 1), (80.0, 1), (80.0, 1)]);
    let output = recommend(&engine, &dims);

    assert_eq!(
        output.recommendations,
        vec![
            "Add independent review to the board calendar.",
            "Keep governance documents current.",
        ]
    );
    assert!(output.scenarios.is_empty());
}

#[test]
fn test_scenarios_for_financial_engines() {
    let engine = Engine::builtin(EngineKind::BreakEven).unwrap();
    let dims = dims_for(&engine, &[(90.0, 1), (90.0, 1), (90.0, 1)]);
    let aggregate = run_stage3(&engine, &dims);
    let input = ValidatedInput {
        fields: [("initial_investment", 100_000.0), ("monthly_benefit", 20_000.0)]
            .into_iter()
            .collect(),
        answers: Vec::new(),
    };
    let output = run_stage6(&engine, &dims, aggregate, &input);

    assert!(output.recommendations.is_empty());
    let kinds: Vec<ScenarioKind> = output.scenarios.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![ScenarioKind::Conservative, ScenarioKind::Realistic, ScenarioKind::Optimistic]
    );
    assert_eq!(output.scenarios[0].multiplier, 0.7);
    assert_eq!(output.scenarios[1].multiplier, 1.0);
    assert_eq!(output.scenarios[2].multiplier, 1.3);
    assert_eq!(output.scenarios[0].payback_months, 8);
    assert_eq!(output.scenarios[1].payback_months, 5);
    assert_eq!(output.scenarios[2].payback_months, 4);
}
