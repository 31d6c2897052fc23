use crate::engines::defs::Trigger;
use crate::engines::Engine;
use crate::model::bands::band_for;
use crate::model::dimension::Dimension;
use crate::model::gaps::{priority_for, Priority};
use crate::model::scenario::{scenario, Scenario, ScenarioKind};
use crate::pipeline::stage1_validate::ValidatedInput;
use crate::pipeline::stage3_aggregate::{outward_score, Aggregate};

#[derive(Debug, Clone, Default)]
pub struct Stage6Output {
    pub recommendations: Vec<&'static str>,
    pub scenarios: Vec<Scenario>,
}

/// Advice for every lagging dimension, highest priority first, ties in
/// schema declaration order. An urgent call to action, when the engine
/// defines one and the unrounded composite trips it, always lands at
/// the end of the list.
pub fn run_stage6(
    engine: &Engine,
    dimensions: &[Dimension],
    aggregate: Aggregate,
    input: &ValidatedInput,
) -> Stage6Output {
    let mut ranked: Vec<(Priority, &'static str)> = Vec::new();
    for (def, dim) in engine.dimensions.iter().zip(dimensions) {
        if dim.observations == 0 || dim.score >= dim.target {
            continue;
        }
        let outward = outward_score(engine.orientation, dim.score);
        let band = band_for(&engine.bands, outward).label;
        ranked.push((priority_for(dim.score), engine.action_for(def, band)));
    }
    ranked.sort_by_key(|entry| entry.0);

    let mut recommendations: Vec<&'static str> =
        ranked.into_iter().map(|(_, text)| text).collect();

    if let Some(urgent) = &engine.urgent {
        let triggered = match urgent.trigger {
            Trigger::AtOrAbove => aggregate.outward >= urgent.threshold,
            Trigger::Below => aggregate.outward < urgent.threshold,
        };
        if triggered {
            recommendations.push(urgent.text);
        }
    }

    let scenarios = match &engine.financial {
        Some(fin) => {
            let investment = input.field(fin.investment_field);
            let benefit = input.field(fin.benefit_field);
            let ramp = input.field(fin.ramp_field) as u32;
            vec![
                scenario(
                    ScenarioKind::Conservative,
                    fin.conservative,
                    investment,
                    benefit,
                    ramp,
                    fin.horizon_months,
                ),
                scenario(
                    ScenarioKind::Realistic,
                    1.0,
                    investment,
                    benefit,
                    ramp,
                    fin.horizon_months,
                ),
                scenario(
                    ScenarioKind::Optimistic,
                    fin.optimistic,
                    investment,
                    benefit,
                    ramp,
                    fin.horizon_months,
                ),
            ]
        }
        None => Vec::new(),
    };

    Stage6Output {
        recommendations,
        scenarios,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_recommend.rs"]
mod tests;
