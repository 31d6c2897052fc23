use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use crate::engines::Engine;
use crate::model::AssessmentInput;

/// Invalid values are rejected, never clamped or defaulted. The first
/// offending field is reported; for flat engines that means schema
/// declaration order, for questionnaires the order answers arrived in.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("input contains no values")]
    EmptyInput,
    #[error("missing required field '{0}'")]
    MissingField(String),
    #[error("field '{field}' value {value} is outside {min}..={max}")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("field '{field}' must be a whole number, got {value}")]
    NotInteger { field: String, value: f64 },
    #[error("field '{0}' must be a finite number")]
    NotFinite(String),
    #[error("unknown field '{0}'")]
    UnknownField(String),
    #[error("unknown question '{0}'")]
    UnknownQuestion(String),
    #[error("duplicate answer for question '{0}'")]
    DuplicateAnswer(String),
    #[error("this engine takes questionnaire answers, not fields")]
    UnexpectedFields,
    #[error("this engine takes fields, not questionnaire answers")]
    UnexpectedAnswers,
}

/// Schema-checked input. Field keys are canonical (borrowed from the
/// engine's field table); answers are indices into the question table.
#[derive(Debug, Clone, Default)]
pub struct ValidatedInput {
    pub fields: BTreeMap<&'static str, f64>,
    pub answers: Vec<(usize, f64)>,
}

impl ValidatedInput {
    pub fn field(&self, key: &str) -> f64 {
        self.fields.get(key).copied().unwrap_or(0.0)
    }
}

pub fn run_stage1(
    engine: &Engine,
    input: &AssessmentInput,
) -> Result<ValidatedInput, ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    if engine.questions.is_empty() {
        if !input.answers.is_empty() {
            return Err(ValidationError::UnexpectedAnswers);
        }
        validate_fields(engine, input)
    } else {
        if !input.fields.is_empty() {
            return Err(ValidationError::UnexpectedFields);
        }
        validate_answers(engine, input)
    }
}

fn validate_fields(
    engine: &Engine,
    input: &AssessmentInput,
) -> Result<ValidatedInput, ValidationError> {
    for key in input.fields.keys() {
        if !engine.fields.iter().any(|rule| rule.key == key) {
            return Err(ValidationError::UnknownField(key.clone()));
        }
    }

    let mut fields = BTreeMap::new();
    for rule in &engine.fields {
        let Some(&value) = input.fields.get(rule.key) else {
            if rule.required {
                return Err(ValidationError::MissingField(rule.key.to_string()));
            }
            continue;
        };
        if !value.is_finite() {
            return Err(ValidationError::NotFinite(rule.key.to_string()));
        }
        if value < rule.min || value > rule.max {
            return Err(ValidationError::OutOfRange {
                field: rule.key.to_string(),
                value,
                min: rule.min,
                max: rule.max,
            });
        }
        if rule.integer && value.fract() != 0.0 {
            return Err(ValidationError::NotInteger {
                field: rule.key.to_string(),
                value,
            });
        }
        fields.insert(rule.key, value);
    }

    Ok(ValidatedInput {
        fields,
        answers: Vec::new(),
    })
}

fn validate_answers(
    engine: &Engine,
    input: &AssessmentInput,
) -> Result<ValidatedInput, ValidationError> {
    let mut seen = BTreeSet::new();
    let mut answers = Vec::with_capacity(input.answers.len());

    for answer in &input.answers {
        let Some(index) = engine
            .questions
            .iter()
            .position(|question| question.id == answer.question)
        else {
            return Err(ValidationError::UnknownQuestion(answer.question.clone()));
        };
        if !seen.insert(index) {
            return Err(ValidationError::DuplicateAnswer(answer.question.clone()));
        }
        if !answer.value.is_finite() {
            return Err(ValidationError::NotFinite(answer.question.clone()));
        }
        if answer.value < 0.0 || answer.value > 100.0 {
            return Err(ValidationError::OutOfRange {
                field: answer.question.clone(),
                value: answer.value,
                min: 0.0,
                max: 100.0,
            });
        }
        answers.push((index, answer.value));
    }

    Ok(ValidatedInput {
        fields: BTreeMap::new(),
        answers,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_validate.rs"]
mod tests;
