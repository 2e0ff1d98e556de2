//! Application state types
//!
//! All state types live here to maintain clean dependency:
//! UI layer imports from app layer, not vice versa.

use std::time::Instant;

use super::session::SessionState;
use crate::constants::ERROR_TTL_SECS;
use crate::input::KeybindingEntry;
use crate::prompt::{FieldId, FieldSet};

/// Which control currently receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    ApiKey,
    Field(FieldId),
    Tone,
    Temperature,
    /// The prompt editor, only reachable once a prompt exists
    Prompt,
}

impl Default for Focus {
    fn default() -> Self {
        Self::Field(FieldId::Objective)
    }
}

impl Focus {
    /// Tab order. The prompt editor is appended when it is visible.
    pub fn order(with_prompt: bool) -> Vec<Focus> {
        let mut order = vec![Focus::ApiKey];
        order.extend(FieldId::ALL.iter().map(|&id| Focus::Field(id)));
        order.push(Focus::Tone);
        order.push(Focus::Temperature);
        if with_prompt {
            order.push(Focus::Prompt);
        }
        order
    }

    pub fn next(self, with_prompt: bool) -> Self {
        let order = Self::order(with_prompt);
        let idx = order.iter().position(|f| *f == self).unwrap_or(0);
        order[(idx + 1) % order.len()]
    }

    pub fn prev(self, with_prompt: bool) -> Self {
        let order = Self::order(with_prompt);
        let idx = order.iter().position(|f| *f == self).unwrap_or(0);
        order[(idx + order.len() - 1) % order.len()]
    }

    /// Whether printable keys edit text in this control
    pub fn is_text(self) -> bool {
        !matches!(self, Self::Tone | Self::Temperature)
    }
}

/// Form inputs plus the credential, which never leaves memory
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub fields: FieldSet,
    pub api_key: String,
    pub focus: Focus,
}

/// Modal overlay state - only one can be active at a time
#[derive(Debug, Clone, Default)]
pub enum ModalState {
    #[default]
    None,
    Help {
        keybindings: Vec<KeybindingEntry>,
        scroll: usize,
    },
}

impl ModalState {
    pub fn is_help(&self) -> bool {
        matches!(self, Self::Help { .. })
    }
}

/// Loading, error, and status message state
#[derive(Debug, Clone, Default)]
pub struct StatusState {
    pub loading: bool,
    pub error: Option<String>,
    pub error_time: Option<Instant>,
    pub message: String,
}

impl StatusState {
    pub fn set_error(&mut self, error: impl ToString) {
        self.error = Some(error.to_string());
        self.error_time = Some(Instant::now());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
        self.error_time = None;
    }

    /// Clear error if TTL expired. Returns true if error was cleared.
    pub fn clear_error_if_expired(&mut self) -> bool {
        if let Some(time) = self.error_time
            && time.elapsed().as_secs() >= ERROR_TTL_SECS
        {
            self.clear_error();
            true
        } else {
            false
        }
    }

    pub fn set_message(&mut self, msg: impl ToString) {
        self.message = msg.to_string();
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: FormState,
    pub session: SessionState,
    pub status: StatusState,
    pub modal: ModalState,
}

impl AppState {
    pub fn new(fields: FieldSet) -> Self {
        Self {
            form: FormState {
                fields,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// The prompt editor is shown once a prompt has been created
    pub fn prompt_visible(&self) -> bool {
        self.session.can_submit()
    }

    pub fn set_error(&mut self, error: impl ToString) {
        self.status.set_error(error);
    }

    pub fn set_status(&mut self, msg: impl ToString) {
        self.status.set_message(msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_order_without_prompt() {
        let order = Focus::order(false);
        assert_eq!(order.len(), 12);
        assert_eq!(order[0], Focus::ApiKey);
        assert_eq!(order[1], Focus::Field(FieldId::Objective));
        assert_eq!(*order.last().unwrap(), Focus::Temperature);
    }

    #[test]
    fn test_focus_wraps_around() {
        assert_eq!(Focus::Temperature.next(false), Focus::ApiKey);
        assert_eq!(Focus::Temperature.next(true), Focus::Prompt);
        assert_eq!(Focus::Prompt.next(true), Focus::ApiKey);
        assert_eq!(Focus::ApiKey.prev(true), Focus::Prompt);
        assert_eq!(Focus::ApiKey.prev(false), Focus::Temperature);
    }

    #[test]
    fn test_hidden_prompt_focus_recovers() {
        // Prompt focus is not in the order when hidden; next falls back to the start
        assert_eq!(
            Focus::Prompt.next(false),
            Focus::Field(FieldId::Objective)
        );
    }

    #[test]
    fn test_error_expiry() {
        let mut status = StatusState::default();
        status.set_error("boom");
        assert!(!status.clear_error_if_expired());

        status.error_time = Some(Instant::now() - std::time::Duration::from_secs(ERROR_TTL_SECS));
        assert!(status.clear_error_if_expired());
        assert!(status.error.is_none());
    }
}
