//! Form actions: create/submit, focus movement, choice selection, reset

use crate::app::session::SubmitOutcome;
use crate::app::state::Focus;
use crate::constants::API_KEY_URL;

use super::super::App;

impl App {
    pub(crate) fn next_field(&mut self) {
        let visible = self.state.prompt_visible();
        self.state.form.focus = self.state.form.focus.next(visible);
    }

    pub(crate) fn prev_field(&mut self) {
        let visible = self.state.prompt_visible();
        self.state.form.focus = self.state.form.focus.prev(visible);
    }

    pub(crate) fn select_next(&mut self) {
        let fields = &mut self.state.form.fields;
        match self.state.form.focus {
            Focus::Tone => fields.tone = fields.tone.next(),
            Focus::Temperature => fields.temperature = fields.temperature.next(),
            _ => {}
        }
    }

    pub(crate) fn select_prev(&mut self) {
        let fields = &mut self.state.form.fields;
        match self.state.form.focus {
            Focus::Tone => fields.tone = fields.tone.prev(),
            Focus::Temperature => fields.temperature = fields.temperature.prev(),
            _ => {}
        }
    }

    /// Compile the form into the editable prompt
    pub(crate) fn create_prompt(&mut self) {
        let result = self.state.session.compile(&self.state.form.fields).map(|_| ());

        match result {
            Ok(()) => {
                self.state.status.clear_error();
                self.state.form.focus = Focus::Prompt;
                self.state
                    .set_status("Prompt created. Edit it if needed, then Ctrl+S to submit");
            }
            Err(e) => {
                self.state.set_error(e);
            }
        }
    }

    /// Mark the submit as in flight. Returns false when submit is hidden.
    pub(crate) fn begin_submit(&mut self) -> bool {
        if !self.state.session.can_submit() {
            return false;
        }
        self.state.status.loading = true;
        self.state.set_status("Submitting...");
        true
    }

    /// Send the edited prompt. Blocks input handling until the call returns.
    pub(crate) async fn submit_prompt(&mut self) {
        let temperature = self.state.form.fields.temperature.value();
        let outcome = self
            .state
            .session
            .submit(
                &self.client,
                &self.config.completion,
                temperature,
                &self.state.form.api_key,
            )
            .await;
        self.state.status.loading = false;

        match outcome {
            SubmitOutcome::Hidden => {}
            SubmitOutcome::MissingCredential => {
                self.state.form.focus = Focus::ApiKey;
                self.state.set_status("An API key is required to submit");
            }
            SubmitOutcome::Completed => {
                self.state.set_status("Prompt submitted successfully.");
            }
            SubmitOutcome::Failed => {
                self.state.set_status("Submit failed, see the output panel");
            }
        }
    }

    pub(crate) fn clear_field(&mut self) {
        match self.state.form.focus {
            Focus::ApiKey => self.state.form.api_key.clear(),
            Focus::Field(id) => self.state.form.fields.get_mut(id).clear(),
            Focus::Prompt => self.state.session.edit(""),
            Focus::Tone | Focus::Temperature => {}
        }
    }

    /// Put every form field back to its starting value. The prompt and output stay.
    pub(crate) fn reset_form(&mut self) {
        self.state.form.fields = Self::initial_fields(&self.config);
        self.state.set_status("Form reset to defaults");
    }

    pub(crate) fn open_key_link(&mut self) {
        match open::that(API_KEY_URL) {
            Ok(()) => self.state.set_status(format!("Opened {}", API_KEY_URL)),
            Err(e) => {
                tracing::warn!("Failed to open browser: {}", e);
                self.state.set_error(format!("Could not open browser: {}", e));
            }
        }
    }
}
