use crate::engines::Engine;
use crate::model::bands::{band_for, BandDef};
use crate::model::dimension::Dimension;
use crate::model::scores::{round1, SubScore};
use crate::pipeline::stage3_aggregate::{outward_score, Aggregate};

#[derive(Debug, Clone)]
pub struct Classification {
    pub overall: BandDef,
    pub sub_scores: Vec<SubScore>,
}

/// Places the composite and each observed dimension into the engine's
/// band table. Band lookups use unrounded scores; rounding happens
/// only on the values that leave the pipeline.
pub fn run_stage4(engine: &Engine, dimensions: &[Dimension], aggregate: Aggregate) -> Classification {
    let overall = band_for(&engine.bands, aggregate.outward);

    let mut sub_scores = Vec::with_capacity(dimensions.len());
    for dim in dimensions {
        if dim.observations == 0 {
            continue;
        }
        let outward = outward_score(engine.orientation, dim.score);
        sub_scores.push(SubScore {
            dimension: dim.key,
            label: dim.label,
            score: round1(outward),
            band: band_for(&engine.bands, outward).label,
            observations: dim.observations,
        });
    }

    Classification {
        overall,
        sub_scores,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_classify.rs"]
mod tests;
