use serde::Serialize;

use crate::model::gaps::Gap;
use crate::model::scenario::Scenario;

/// Scores are rounded to one decimal at the edge only; bands and every
/// derived figure are computed from the unrounded value.
pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Serialize)]
pub struct CompositeScore {
    pub value: f64,
    pub band: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubScore {
    pub dimension: &'static str,
    pub label: &'static str,
    pub score: f64,
    pub band: &'static str,
    pub observations: usize,
}

/// The complete outcome of one assessment run.
#[derive(Debug, Clone, Serialize)]
pub struct EngineReport {
    pub engine: &'static str,
    pub engine_name: &'static str,
    pub overall: CompositeScore,
    pub sub_scores: Vec<SubScore>,
    pub gaps: Vec<Gap>,
    pub recommendations: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scenarios: Vec<Scenario>,
}
