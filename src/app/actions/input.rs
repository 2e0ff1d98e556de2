//! Text input handling (chars, backspace)

use crate::app::state::Focus;

use super::super::App;

impl App {
    pub(crate) fn handle_char(&mut self, c: char) {
        match self.state.form.focus {
            Focus::Prompt => {
                let mut text = self.state.session.prompt().unwrap_or_default().to_string();
                text.push(c);
                self.state.session.edit(text);
            }
            // Everything but the prompt editor is single-line
            _ if c == '\n' => {}
            Focus::ApiKey => self.state.form.api_key.push(c),
            Focus::Field(id) => self.state.form.fields.get_mut(id).push(c),
            Focus::Tone | Focus::Temperature => {}
        }
    }

    pub(crate) fn handle_backspace(&mut self) {
        match self.state.form.focus {
            Focus::Prompt => {
                if let Some(prompt) = self.state.session.prompt() {
                    let mut text = prompt.to_string();
                    text.pop();
                    self.state.session.edit(text);
                }
            }
            Focus::ApiKey => {
                self.state.form.api_key.pop();
            }
            Focus::Field(id) => {
                self.state.form.fields.get_mut(id).pop();
            }
            Focus::Tone | Focus::Temperature => {}
        }
    }
}
