use crate::engines::defs::Orientation;
use crate::engines::Engine;
use crate::model::dimension::Dimension;

/// Composite of the observed dimensions. `progress` is the internal
/// higher-is-better mean; `outward` is what the engine reports, which
/// for exposure engines is the flipped value.
#[derive(Debug, Clone, Copy)]
pub struct Aggregate {
    pub progress: f64,
    pub outward: f64,
    pub observed: usize,
}

pub fn run_stage3(engine: &Engine, dimensions: &[Dimension]) -> Aggregate {
    let mut weighted = 0.0;
    let mut weight_total = 0.0;
    let mut observed = 0usize;

    for dim in dimensions {
        if dim.observations == 0 {
            continue;
        }
        weighted += dim.weight * dim.score;
        weight_total += dim.weight;
        observed += 1;
    }

    let progress = if weight_total > 0.0 {
        weighted / weight_total
    } else {
        0.0
    };

    Aggregate {
        progress,
        outward: outward_score(engine.orientation, progress),
        observed,
    }
}

/// Progress engines report goodness directly; exposure engines report
/// the complement so that a high number reads as high risk.
pub fn outward_score(orientation: Orientation, progress: f64) -> f64 {
    match orientation {
        Orientation::Progress => progress,
        Orientation::Exposure => 100.0 - progress,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_aggregate.rs"]
mod tests;
