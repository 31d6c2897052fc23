use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

pub mod defs;
pub mod loader;

pub use defs::{
    AdviceDef, DimensionDef, EngineDef, EngineKind, FieldDef, FinancialDef, Formula, Orientation,
    QuestionDef, Scale, Trigger, UrgentDef, builtin_engines, engine_def,
};

use crate::model::AssessmentInput;
use crate::model::bands::BandDef;
use crate::model::scores::EngineReport;
use crate::pipeline;
use crate::pipeline::stage1_validate::ValidationError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("engine '{engine}' fields: {detail}")]
    Fields { engine: &'static str, detail: String },
    #[error("engine '{engine}' dimensions: {detail}")]
    Dimensions { engine: &'static str, detail: String },
    #[error("engine '{engine}' questions: {detail}")]
    Questions { engine: &'static str, detail: String },
    #[error("engine '{engine}' bands: {detail}")]
    Bands { engine: &'static str, detail: String },
    #[error("engine '{engine}' advice: {detail}")]
    Advice { engine: &'static str, detail: String },
    #[error("engine '{engine}' urgent rule: {detail}")]
    Urgent { engine: &'static str, detail: String },
    #[error("engine '{engine}' financial: {detail}")]
    Financial { engine: &'static str, detail: String },
    #[error("engine '{engine}' overrides: {detail}")]
    Overrides { engine: &'static str, detail: String },
}

/// Weight, target, and band-threshold adjustments layered over a builtin
/// table. Band labels are fixed; only their thresholds move.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineOverrides {
    #[serde(default)]
    pub weights: BTreeMap<String, f64>,
    #[serde(default)]
    pub targets: BTreeMap<String, f64>,
    #[serde(default)]
    pub bands: BTreeMap<String, f64>,
    #[serde(default)]
    pub urgent_threshold: Option<f64>,
}

/// A validated, runnable engine. Construction checks the whole table up
/// front; `compute` cannot fail on configuration afterward.
#[derive(Debug, Clone)]
pub struct Engine {
    pub kind: EngineKind,
    pub name: &'static str,
    pub orientation: Orientation,
    pub fields: Vec<FieldDef>,
    pub questions: Vec<QuestionDef>,
    pub dimensions: Vec<DimensionDef>,
    pub bands: Vec<BandDef>,
    pub advice: Vec<AdviceDef>,
    pub urgent: Option<UrgentDef>,
    pub financial: Option<FinancialDef>,
}

impl Engine {
    /// Validates an arbitrary definition table and turns it into a
    /// runnable engine. The eight shipped tables go through the same
    /// path via `builtin`.
    pub fn new(def: &EngineDef) -> Result<Engine, ConfigError> {
        loader::build_engine(def, None)
    }

    pub fn builtin(kind: EngineKind) -> Result<Engine, ConfigError> {
        Engine::new(defs::engine_def(kind))
    }

    pub fn with_overrides(
        kind: EngineKind,
        overrides: &EngineOverrides,
    ) -> Result<Engine, ConfigError> {
        loader::build_engine(defs::engine_def(kind), Some(overrides))
    }

    pub fn id(&self) -> &'static str {
        self.kind.id()
    }

    /// Runs the full pipeline on one input record.
    pub fn compute(&self, input: &AssessmentInput) -> Result<EngineReport, ValidationError> {
        pipeline::run(self, input)
    }

    pub(crate) fn action_for(&self, dimension: &DimensionDef, band: &'static str) -> &'static str {
        self.advice
            .iter()
            .find(|rule| rule.dimension == dimension.key && rule.band == band)
            .map(|rule| rule.text)
            .unwrap_or(dimension.action)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/engines/tests.rs"]
mod tests;
