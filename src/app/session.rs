//! Session state for one form session and its explicit transitions
//!
//! `compile`, `edit` and `submit` are the only ways the session changes. Each
//! returns what happened so the caller can update the status line; the UI
//! reads the resulting state from the next snapshot.

use thiserror::Error;

use crate::ai::{Completer, CompletionRequest};
use crate::config::CompletionConfig;
use crate::constants::API_KEY_URL;
use crate::prompt::{FieldSet, ValidationError, compile};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please enter your OpenAI API key. You can get a key at {}", API_KEY_URL)]
pub struct CredentialError;

/// Where the session is in the create/submit cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Unsubmitted,
    Compiled,
    Submitted,
}

/// Contents of the output region
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Output {
    #[default]
    Empty,
    /// Text returned by the completion service
    Text(String),
    /// Validation or credential problem the user can fix
    Warning(String),
    /// Completion call failed
    Error(String),
}

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No prompt has been created yet, so there is nothing to submit
    Hidden,
    MissingCredential,
    Completed,
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    create_clicked: bool,
    prompt: Option<String>,
    output: Output,
    phase: Phase,
}

impl SessionState {
    /// Compile the field set and store the result as the editable prompt.
    ///
    /// On failure the stored prompt is left as it was and the output shows
    /// the validation message.
    pub fn compile(&mut self, fields: &FieldSet) -> Result<&str, ValidationError> {
        match compile(fields) {
            Ok(prompt) => {
                tracing::debug!("Compiled prompt with {} lines", prompt.as_str().lines().count());
                self.create_clicked = true;
                self.phase = Phase::Compiled;
                self.output = Output::Empty;
                Ok(self.prompt.insert(prompt.into_string()).as_str())
            }
            Err(e) => {
                self.output = Output::Warning(e.to_string());
                Err(e)
            }
        }
    }

    /// Replace the stored prompt verbatim. No validation, no re-sync with fields.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.prompt = Some(text.into());
    }

    /// Send the stored prompt to the completer.
    ///
    /// Does nothing before the first successful compile. An empty API key is
    /// reported without touching the network. Any completion failure is
    /// logged in full and shown to the user as a one-line message.
    pub async fn submit<C: Completer>(
        &mut self,
        completer: &C,
        settings: &CompletionConfig,
        temperature: f32,
        api_key: &str,
    ) -> SubmitOutcome {
        let Some(prompt) = self.prompt.as_ref().filter(|_| self.create_clicked) else {
            return SubmitOutcome::Hidden;
        };

        if api_key.trim().is_empty() {
            self.output = Output::Warning(CredentialError.to_string());
            return SubmitOutcome::MissingCredential;
        }

        let request = CompletionRequest {
            model: settings.model.clone(),
            prompt: prompt.clone(),
            max_tokens: settings.max_tokens,
            temperature,
        };

        self.phase = Phase::Submitted;
        match completer.complete(api_key.trim(), &request).await {
            Ok(text) => {
                tracing::info!("Completion returned {} chars", text.len());
                self.output = Output::Text(text);
                SubmitOutcome::Completed
            }
            Err(e) => {
                tracing::error!(error = ?e, "Completion call failed: {}", e);
                self.output = Output::Error(format!("An error occurred: {}", e));
                SubmitOutcome::Failed
            }
        }
    }

    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    /// Whether the submit control is shown
    pub fn can_submit(&self) -> bool {
        self.create_clicked
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
}
