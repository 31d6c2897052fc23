use crate::engines::Engine;
use crate::model::bands::band_for;
use crate::model::dimension::Dimension;
use crate::model::gaps::{priority_for, Gap};
use crate::model::scores::round1;
use crate::pipeline::stage3_aggregate::outward_score;

/// One gap per observed dimension sitting below its target. Sorted by
/// priority, then by how far down the dimension is, so the worst gap
/// leads the list. The sort key is the unrounded score; the reported
/// `current` is rounded afterwards.
pub fn run_stage5(engine: &Engine, dimensions: &[Dimension]) -> Vec<Gap> {
    let mut ranked: Vec<(f64, Gap)> = Vec::new();

    for (def, dim) in engine.dimensions.iter().zip(dimensions) {
        if dim.observations == 0 || dim.score >= dim.target {
            continue;
        }
        let outward = outward_score(engine.orientation, dim.score);
        let band = band_for(&engine.bands, outward).label;
        ranked.push((
            dim.score,
            Gap {
                dimension: dim.key,
                label: dim.label,
                current: round1(dim.score),
                target: dim.target,
                priority: priority_for(dim.score),
                action: engine.action_for(def, band),
            },
        ));
    }

    ranked.sort_by(|a, b| {
        a.1.priority
            .cmp(&b.1.priority)
            .then_with(|| a.0.total_cmp(&b.0))
    });
    ranked.into_iter().map(|(_, gap)| gap).collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_gaps.rs"]
mod tests;
