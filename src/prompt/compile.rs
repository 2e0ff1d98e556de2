//! Compiles a [`FieldSet`] into the line-per-field prompt text

use thiserror::Error;

use super::{FieldId, FieldSet};
use crate::constants::OBJECTIVE_PLACEHOLDER;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Objective cannot be empty, please provide an objective")]
pub struct ValidationError;

/// Newline-joined prompt text derived from a field set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPrompt(String);

impl CompiledPrompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for CompiledPrompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Build the prompt: one `Label: value` line per non-empty field in declared
/// order, objective first and tone last.
///
/// Fails when the objective is empty or exactly the placeholder text.
pub fn compile(fields: &FieldSet) -> Result<CompiledPrompt, ValidationError> {
    if fields.objective.is_empty() || fields.objective == OBJECTIVE_PLACEHOLDER {
        return Err(ValidationError);
    }

    let mut lines: Vec<String> = FieldId::ALL
        .iter()
        .map(|&id| (id, fields.get(id)))
        .filter(|(_, value)| !value.is_empty())
        .map(|(id, value)| format!("{}: {}", id.label(), value))
        .collect();
    lines.push(format!("Tone: {}", fields.tone.label()));

    Ok(CompiledPrompt(lines.join("\n")))
}
