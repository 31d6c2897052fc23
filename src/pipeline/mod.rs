pub mod stage1_validate;
pub mod stage2_normalize;
pub mod stage3_aggregate;
pub mod stage4_classify;
pub mod stage5_gaps;
pub mod stage6_recommend;

use crate::engines::Engine;
use crate::model::scores::{round1, CompositeScore, EngineReport};
use crate::model::AssessmentInput;

pub use stage1_validate::{ValidatedInput, ValidationError};

/// Runs the six stages in order and assembles the report. Pure apart
/// from allocation: same engine plus same input gives a bitwise
/// identical report.
pub fn run(engine: &Engine, input: &AssessmentInput) -> Result<EngineReport, ValidationError> {
    let validated = stage1_validate::run_stage1(engine, input)?;
    let dimensions = stage2_normalize::run_stage2(engine, &validated);
    let aggregate = stage3_aggregate::run_stage3(engine, &dimensions);
    let classification = stage4_classify::run_stage4(engine, &dimensions, aggregate);
    let gaps = stage5_gaps::run_stage5(engine, &dimensions);
    let outcome = stage6_recommend::run_stage6(engine, &dimensions, aggregate, &validated);

    Ok(EngineReport {
        engine: engine.id(),
        engine_name: engine.name,
        overall: CompositeScore {
            value: round1(aggregate.outward),
            band: classification.overall.label,
        },
        sub_scores: classification.sub_scores,
        gaps,
        recommendations: outcome.recommendations,
        scenarios: outcome.scenarios,
    })
}
