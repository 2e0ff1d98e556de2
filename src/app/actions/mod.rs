//! Action handlers for user input
//!
//! - `form`: create/submit buttons, focus and choice navigation, reset
//! - `input`: text input handling

mod form;
mod input;

use crate::input::Action;

use super::App;
use super::state::ModalState;

impl App {
    /// Dispatch every action except submit, which the event loop awaits itself
    pub(crate) fn handle_action(&mut self, action: Action) {
        match action {
            Action::NextField => self.next_field(),
            Action::PrevField => self.prev_field(),
            Action::SelectNext => self.select_next(),
            Action::SelectPrev => self.select_prev(),
            Action::CreatePrompt => self.create_prompt(),
            Action::SubmitPrompt => {
                tracing::warn!("Submit dispatched synchronously; ignoring");
            }
            Action::ClearField => self.clear_field(),
            Action::ResetForm => self.reset_form(),
            Action::OpenKeyLink => self.open_key_link(),
            Action::Help => self.toggle_help(),
            Action::Up => self.help_scroll(-1),
            Action::Down => self.help_scroll(1),
            Action::Quit => {} // Handled in event loop
        }
    }

    fn toggle_help(&mut self) {
        self.state.modal = if self.state.modal.is_help() {
            ModalState::None
        } else {
            ModalState::Help {
                keybindings: self.bindings.all_bindings(),
                scroll: 0,
            }
        };
    }

    fn help_scroll(&mut self, delta: isize) {
        if let ModalState::Help {
            keybindings,
            scroll,
        } = &mut self.state.modal
        {
            let max = keybindings.len().saturating_sub(1);
            *scroll = scroll.saturating_add_signed(delta).min(max);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::app::state::{Focus, ModalState};
    use crate::config::Config;
    use crate::input::Action;
    use crate::prompt::{FieldId, Temperature, Tone};

    fn test_app() -> App {
        App::new(Config::default()).unwrap()
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_char(c);
        }
    }

    #[test]
    fn test_form_starts_with_defaults() {
        let app = test_app();
        assert_eq!(app.state.form.fields.objective, "Write an email for");
        assert_eq!(app.state.form.fields.word_count, "75 to 100");
        assert_eq!(app.state.form.focus, Focus::Field(FieldId::Objective));
        assert!(!app.state.prompt_visible());
    }

    #[test]
    fn test_create_with_placeholder_objective_fails() {
        let mut app = test_app();
        app.handle_action(Action::CreatePrompt);

        assert!(!app.state.prompt_visible());
        assert!(app.state.status.error.is_some());
        assert_eq!(app.state.session.prompt(), None);
    }

    #[test]
    fn test_type_create_and_edit() {
        let mut app = test_app();
        type_text(&mut app, " a product launch");
        app.handle_action(Action::CreatePrompt);

        assert!(app.state.prompt_visible());
        assert_eq!(app.state.form.focus, Focus::Prompt);
        let prompt = app.state.session.prompt().unwrap().to_string();
        assert!(prompt.starts_with("Objective: Write an email for a product launch\n"));
        assert!(prompt.ends_with("Tone: Professional"));

        app.handle_backspace();
        type_text(&mut app, "l\nThanks");
        assert!(
            app.state
                .session
                .prompt()
                .unwrap()
                .ends_with("Tone: Professional\nThanks")
        );
    }

    #[test]
    fn test_edits_do_not_touch_fields() {
        let mut app = test_app();
        type_text(&mut app, " a launch");
        app.handle_action(Action::CreatePrompt);
        type_text(&mut app, "!");

        assert_eq!(app.state.form.fields.objective, "Write an email for a launch");
    }

    #[test]
    fn test_choice_navigation() {
        let mut app = test_app();
        app.state.form.focus = Focus::Tone;
        app.handle_action(Action::SelectNext);
        assert_eq!(app.state.form.fields.tone, Tone::Friendly);

        app.handle_action(Action::NextField);
        assert_eq!(app.state.form.focus, Focus::Temperature);
        app.handle_action(Action::SelectPrev);
        assert_eq!(app.state.form.fields.temperature, Temperature::Diverse);

        // Typing on a choice field is ignored
        app.handle_char('x');
        assert_eq!(app.state.form.fields.temperature, Temperature::Diverse);
    }

    #[test]
    fn test_prompt_focus_only_after_create() {
        let mut app = test_app();
        app.state.form.focus = Focus::Temperature;
        app.handle_action(Action::NextField);
        assert_eq!(app.state.form.focus, Focus::ApiKey);
    }

    #[test]
    fn test_clear_and_reset() {
        let mut app = test_app();
        app.handle_action(Action::ClearField);
        assert_eq!(app.state.form.fields.objective, "");

        type_text(&mut app, "Thank a mentor");
        app.state.form.api_key = "sk-test".to_string();
        app.handle_action(Action::CreatePrompt);
        app.handle_action(Action::ResetForm);

        assert_eq!(app.state.form.fields.objective, "Write an email for");
        assert_eq!(app.state.form.api_key, "sk-test");
        assert!(app.state.prompt_visible());
    }

    #[test]
    fn test_api_key_field_collects_input() {
        let mut app = test_app();
        app.handle_action(Action::PrevField);
        assert_eq!(app.state.form.focus, Focus::ApiKey);
        type_text(&mut app, "sk-abc");
        app.handle_backspace();
        assert_eq!(app.state.form.api_key, "sk-ab");
    }

    #[test]
    fn test_help_toggle_and_scroll() {
        let mut app = test_app();
        app.handle_action(Action::Help);
        app.handle_action(Action::Down);
        app.handle_action(Action::Down);
        app.handle_action(Action::Up);
        match &app.state.modal {
            ModalState::Help { scroll, .. } => assert_eq!(*scroll, 1),
            other => panic!("expected help modal, got {:?}", other),
        }
        app.handle_action(Action::Help);
        assert!(!app.state.modal.is_help());
    }

    #[tokio::test]
    async fn test_submit_without_key_warns() {
        let mut app = test_app();
        type_text(&mut app, " a launch");
        app.handle_action(Action::CreatePrompt);

        assert!(app.begin_submit());
        app.submit_prompt().await;

        assert_eq!(app.state.form.focus, Focus::ApiKey);
        assert!(!app.state.status.loading);
        assert!(matches!(
            app.state.session.output(),
            crate::app::session::Output::Warning(_)
        ));
    }

    #[test]
    fn test_submit_hidden_before_create() {
        let mut app = test_app();
        assert!(!app.begin_submit());
        assert!(!app.state.status.loading);
    }
}
