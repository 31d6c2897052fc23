use crate::engines::defs::{DimensionDef, Formula, Scale};
use crate::engines::Engine;
use crate::model::dimension::{clamp100, Dimension};
use crate::model::scenario::{project, Projection};
use crate::pipeline::stage1_validate::ValidatedInput;

/// Turns validated raw values into per-dimension scores on a common
/// 0..=100 scale where higher is always better. Inverted dimensions
/// are flipped here, after scaling, so every later stage can treat
/// scores uniformly. Dimensions with no input stay at zero with
/// `observations == 0` and are skipped downstream.
pub fn run_stage2(engine: &Engine, input: &ValidatedInput) -> Vec<Dimension> {
    let projection = engine.financial.as_ref().map(|fin| {
        project(
            input.field(fin.investment_field),
            input.field(fin.benefit_field),
            input.field(fin.ramp_field) as u32,
            fin.horizon_months,
        )
    });

    engine
        .dimensions
        .iter()
        .map(|def| normalize_dimension(engine, def, input, projection.as_ref()))
        .collect()
}

fn normalize_dimension(
    engine: &Engine,
    def: &DimensionDef,
    input: &ValidatedInput,
    projection: Option<&Projection>,
) -> Dimension {
    let sample = sample_for(engine, def, input, projection);
    let (raw, observations) = sample.unwrap_or((0.0, 0));

    let score = if observations == 0 {
        0.0
    } else {
        let scaled = match def.scale {
            Scale::Percent => clamp100(raw),
            Scale::PerUnitCap(cap) => clamp100(raw / cap * 100.0),
            // Formulas produce 0..=100 already.
            Scale::Derived(_) => raw,
        };
        if def.inverted { 100.0 - scaled } else { scaled }
    };

    Dimension {
        key: def.key,
        label: def.label,
        weight: def.weight,
        target: def.target,
        observations,
        raw,
        score,
    }
}

fn sample_for(
    engine: &Engine,
    def: &DimensionDef,
    input: &ValidatedInput,
    projection: Option<&Projection>,
) -> Option<(f64, usize)> {
    if let Scale::Derived(formula) = def.scale {
        return formula_value(formula, input, projection).map(|value| (value, 1));
    }
    if !engine.questions.is_empty() {
        return question_mean(engine, def.key, input);
    }
    def.field
        .and_then(|key| input.fields.get(key).map(|&value| (value, 1)))
}

/// Weighted mean of the answers that landed on this dimension,
/// renormalized over the weights actually answered.
fn question_mean(engine: &Engine, dimension: &str, input: &ValidatedInput) -> Option<(f64, usize)> {
    let mut weighted = 0.0;
    let mut weight_total = 0.0;
    let mut count = 0usize;

    for &(index, value) in &input.answers {
        let question = &engine.questions[index];
        if question.dimension != dimension {
            continue;
        }
        weighted += question.weight * value;
        weight_total += question.weight;
        count += 1;
    }

    if count == 0 || weight_total <= 0.0 {
        None
    } else {
        Some((weighted / weight_total, count))
    }
}

fn formula_value(
    formula: Formula,
    input: &ValidatedInput,
    projection: Option<&Projection>,
) -> Option<f64> {
    match formula {
        Formula::PaybackSpeed => projection.map(payback_speed),
        Formula::RoiStrength => projection.map(|p| clamp100(p.roi_percent / 3.0)),
        // total/investment == roi/100 + 1, so coverage reuses the
        // projection instead of re-walking the ramp.
        Formula::BenefitCoverage => {
            projection.map(|p| clamp100((p.roi_percent / 100.0 + 1.0) / 3.0 * 100.0))
        }
        Formula::RunwayExtension => {
            let raise = input.fields.get("target_raise").copied()?;
            let burn = input.fields.get("monthly_burn").copied()?;
            let revenue = input.field("monthly_revenue");
            let net_burn = burn - revenue;
            if net_burn <= 0.0 {
                // Already default-alive; more runway cannot help more.
                Some(100.0)
            } else {
                Some(clamp100(raise / net_burn / 24.0 * 100.0))
            }
        }
        Formula::RevenueTraction => {
            let burn = input.fields.get("monthly_burn").copied()?;
            let revenue = input.fields.get("monthly_revenue").copied()?;
            Some(clamp100(revenue / burn * 100.0))
        }
        Formula::DilutionHeadroom => input
            .fields
            .get("dilution_pct")
            .map(|&dilution| 100.0 - dilution),
        Formula::GrowthMomentum => input
            .fields
            .get("monthly_growth_pct")
            .map(|&growth| clamp100(growth / 15.0 * 100.0)),
    }
}

/// 100 for break-even in month one, 0 at the horizon or never.
fn payback_speed(projection: &Projection) -> f64 {
    match projection.payback_months {
        Some(month) if projection.horizon_months > 1 => clamp100(
            (projection.horizon_months - month) as f64
                / (projection.horizon_months - 1) as f64
                * 100.0,
        ),
        Some(_) => 100.0,
        None => 0.0,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_normalize.rs"]
mod tests;
