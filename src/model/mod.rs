use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub mod bands;
pub mod dimension;
pub mod gaps;
pub mod scenario;
pub mod scores;

/// One assessment record. Flat engines read `fields`, questionnaire
/// engines read `answers`; the validator rejects the mix that does not
/// belong to the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssessmentInput {
    #[serde(default)]
    pub fields: BTreeMap<String, f64>,
    #[serde(default)]
    pub answers: Vec<Answer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Answer {
    pub question: String,
    pub value: f64,
}

impl AssessmentInput {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.answers.is_empty()
    }
}
