use std::collections::{BTreeMap, BTreeSet};

use crate::engines::defs::{EngineDef, Scale};
use crate::engines::{ConfigError, Engine, EngineOverrides};

const WEIGHT_TOLERANCE: f64 = 1e-9;

pub fn build_engine(
    def: &EngineDef,
    overrides: Option<&EngineOverrides>,
) -> Result<Engine, ConfigError> {
    let mut engine = Engine {
        kind: def.kind,
        name: def.name,
        orientation: def.orientation,
        fields: def.fields.to_vec(),
        questions: def.questions.to_vec(),
        dimensions: def.dimensions.to_vec(),
        bands: def.bands.to_vec(),
        advice: def.advice.to_vec(),
        urgent: def.urgent,
        financial: def.financial,
    };

    if let Some(overrides) = overrides {
        apply_overrides(&mut engine, overrides)?;
    }

    validate(&engine)?;
    Ok(engine)
}

fn apply_overrides(engine: &mut Engine, overrides: &EngineOverrides) -> Result<(), ConfigError> {
    let id = engine.id();

    for (key, weight) in &overrides.weights {
        let dim = engine
            .dimensions
            .iter_mut()
            .find(|dim| dim.key == key)
            .ok_or_else(|| ConfigError::Overrides {
                engine: id,
                detail: format!("unknown dimension '{key}'"),
            })?;
        dim.weight = *weight;
    }

    for (key, target) in &overrides.targets {
        let dim = engine
            .dimensions
            .iter_mut()
            .find(|dim| dim.key == key)
            .ok_or_else(|| ConfigError::Overrides {
                engine: id,
                detail: format!("unknown dimension '{key}'"),
            })?;
        dim.target = *target;
    }

    for (label, low) in &overrides.bands {
        let band = engine
            .bands
            .iter_mut()
            .find(|band| band.label == label)
            .ok_or_else(|| ConfigError::Overrides {
                engine: id,
                detail: format!("unknown band '{label}'"),
            })?;
        band.low = *low;
    }

    if let Some(threshold) = overrides.urgent_threshold {
        match engine.urgent.as_mut() {
            Some(urgent) => urgent.threshold = threshold,
            None => {
                return Err(ConfigError::Overrides {
                    engine: id,
                    detail: "engine has no urgent rule to adjust".to_string(),
                });
            }
        }
    }

    Ok(())
}

fn validate(engine: &Engine) -> Result<(), ConfigError> {
    let id = engine.id();

    let mut field_keys = BTreeSet::new();
    for field in &engine.fields {
        if !field_keys.insert(field.key) {
            return Err(ConfigError::Fields {
                engine: id,
                detail: format!("duplicate field '{}'", field.key),
            });
        }
        if !field.min.is_finite() || !field.max.is_finite() || field.min >= field.max {
            return Err(ConfigError::Fields {
                engine: id,
                detail: format!(
                    "field '{}' has invalid range [{}, {}]",
                    field.key, field.min, field.max
                ),
            });
        }
    }

    if engine.fields.is_empty() && engine.questions.is_empty() {
        return Err(ConfigError::Fields {
            engine: id,
            detail: "engine declares no input surface".to_string(),
        });
    }
    if !engine.fields.is_empty() && !engine.questions.is_empty() {
        return Err(ConfigError::Questions {
            engine: id,
            detail: "questionnaire engines take no flat fields".to_string(),
        });
    }

    if engine.dimensions.is_empty() {
        return Err(ConfigError::Dimensions {
            engine: id,
            detail: "no dimensions declared".to_string(),
        });
    }

    let mut dim_keys = BTreeSet::new();
    let mut weight_total = 0.0;
    for dim in &engine.dimensions {
        if !dim_keys.insert(dim.key) {
            return Err(ConfigError::Dimensions {
                engine: id,
                detail: format!("duplicate dimension '{}'", dim.key),
            });
        }
        if !(dim.weight > 0.0 && dim.weight <= 1.0) {
            return Err(ConfigError::Dimensions {
                engine: id,
                detail: format!("dimension '{}' has invalid weight {}", dim.key, dim.weight),
            });
        }
        if !(0.0..=100.0).contains(&dim.target) {
            return Err(ConfigError::Dimensions {
                engine: id,
                detail: format!("dimension '{}' target {} outside 0..=100", dim.key, dim.target),
            });
        }
        if let Scale::PerUnitCap(cap) = dim.scale {
            if cap <= 0.0 {
                return Err(ConfigError::Dimensions {
                    engine: id,
                    detail: format!("dimension '{}' scale cap must be positive", dim.key),
                });
            }
        }
        if let Some(field) = dim.field {
            if !field_keys.contains(field) {
                return Err(ConfigError::Dimensions {
                    engine: id,
                    detail: format!("dimension '{}' references unknown field '{field}'", dim.key),
                });
            }
        }
        weight_total += dim.weight;
    }
    if (weight_total - 1.0).abs() > WEIGHT_TOLERANCE {
        return Err(ConfigError::Dimensions {
            engine: id,
            detail: format!("weights sum to {weight_total}, expected 1.0"),
        });
    }

    let mut question_ids = BTreeSet::new();
    let mut question_weight: BTreeMap<&str, f64> = BTreeMap::new();
    for question in &engine.questions {
        if !question_ids.insert(question.id) {
            return Err(ConfigError::Questions {
                engine: id,
                detail: format!("duplicate question '{}'", question.id),
            });
        }
        if !dim_keys.contains(question.dimension) {
            return Err(ConfigError::Questions {
                engine: id,
                detail: format!(
                    "question '{}' references unknown dimension '{}'",
                    question.id, question.dimension
                ),
            });
        }
        if !(question.weight > 0.0 && question.weight <= 1.0) {
            return Err(ConfigError::Questions {
                engine: id,
                detail: format!("question '{}' has invalid weight {}", question.id, question.weight),
            });
        }
        *question_weight.entry(question.dimension).or_insert(0.0) += question.weight;
    }
    for (dimension, total) in &question_weight {
        if (total - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(ConfigError::Questions {
                engine: id,
                detail: format!(
                    "weights for dimension '{dimension}' sum to {total}, expected 1.0"
                ),
            });
        }
    }

    // Every dimension needs an input source: questions, a field, or a formula.
    if engine.questions.is_empty() {
        for dim in &engine.dimensions {
            if dim.field.is_none() && !matches!(dim.scale, Scale::Derived(_)) {
                return Err(ConfigError::Dimensions {
                    engine: id,
                    detail: format!("dimension '{}' has no input source", dim.key),
                });
            }
        }
    } else {
        for dim in &engine.dimensions {
            if !question_weight.contains_key(dim.key) {
                return Err(ConfigError::Questions {
                    engine: id,
                    detail: format!("dimension '{}' has no questions", dim.key),
                });
            }
        }
    }

    if engine.bands.is_empty() {
        return Err(ConfigError::Bands {
            engine: id,
            detail: "no bands declared".to_string(),
        });
    }
    if engine.bands[0].low != 0.0 {
        return Err(ConfigError::Bands {
            engine: id,
            detail: format!("first band '{}' must start at 0", engine.bands[0].label),
        });
    }
    for pair in engine.bands.windows(2) {
        if !pair[1].low.is_finite() || pair[1].low <= pair[0].low {
            return Err(ConfigError::Bands {
                engine: id,
                detail: format!("thresholds must be strictly increasing at '{}'", pair[1].label),
            });
        }
    }
    for band in &engine.bands {
        if band.low > 100.0 {
            return Err(ConfigError::Bands {
                engine: id,
                detail: format!("band '{}' starts above 100", band.label),
            });
        }
    }

    for rule in &engine.advice {
        if !dim_keys.contains(rule.dimension) {
            return Err(ConfigError::Advice {
                engine: id,
                detail: format!("rule references unknown dimension '{}'", rule.dimension),
            });
        }
        if !engine.bands.iter().any(|band| band.label == rule.band) {
            return Err(ConfigError::Advice {
                engine: id,
                detail: format!("rule references unknown band '{}'", rule.band),
            });
        }
    }

    if let Some(urgent) = &engine.urgent {
        if !(0.0..=100.0).contains(&urgent.threshold) {
            return Err(ConfigError::Urgent {
                engine: id,
                detail: format!("threshold {} outside 0..=100", urgent.threshold),
            });
        }
    }

    if let Some(financial) = &engine.financial {
        for field in [
            financial.investment_field,
            financial.benefit_field,
            financial.ramp_field,
        ] {
            if !field_keys.contains(field) {
                return Err(ConfigError::Financial {
                    engine: id,
                    detail: format!("references unknown field '{field}'"),
                });
            }
        }
        if financial.horizon_months == 0 {
            return Err(ConfigError::Financial {
                engine: id,
                detail: "horizon must be at least one month".to_string(),
            });
        }
        if !(financial.conservative > 0.0 && financial.conservative <= 1.0) {
            return Err(ConfigError::Financial {
                engine: id,
                detail: format!("conservative multiplier {} outside (0, 1]", financial.conservative),
            });
        }
        if financial.optimistic < 1.0 {
            return Err(ConfigError::Financial {
                engine: id,
                detail: format!("optimistic multiplier {} below 1", financial.optimistic),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/engines/loader.rs"]
mod tests;
