use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::keybindings::{Action, KeyBindings};
use crate::app::state::{AppState, Focus};

pub enum InputResult {
    Continue,
    Quit,
    Action(Action),
    Char(char),
    Backspace,
}

pub fn handle_input(event: Event, state: &AppState, bindings: &KeyBindings) -> InputResult {
    match event {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
            handle_key(key_event, state, bindings)
        }
        _ => InputResult::Continue,
    }
}

fn handle_key(key: KeyEvent, state: &AppState, bindings: &KeyBindings) -> InputResult {
    if state.modal.is_help() {
        return handle_help_input(key, bindings);
    }

    match state.form.focus {
        Focus::Tone | Focus::Temperature => handle_choice_input(key, bindings),
        focus => handle_text_input(key, focus, bindings),
    }
}

/// Printable key without Ctrl/Alt, which always types into a text field
fn is_plain_char(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char(_))
        && !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn action_result(action: Action) -> InputResult {
    if action == Action::Quit {
        InputResult::Quit
    } else {
        InputResult::Action(action)
    }
}

fn handle_text_input(key: KeyEvent, focus: Focus, bindings: &KeyBindings) -> InputResult {
    if !is_plain_char(&key)
        && let Some(action) = bindings.get(&key)
    {
        return match action {
            // No cursor movement inside text fields
            Action::SelectNext | Action::SelectPrev | Action::Up | Action::Down => {
                InputResult::Continue
            }
            action => action_result(action),
        };
    }

    match key.code {
        KeyCode::Char(c) if is_plain_char(&key) => InputResult::Char(c),
        KeyCode::Backspace => InputResult::Backspace,
        KeyCode::Enter if focus == Focus::Prompt => InputResult::Char('\n'),
        KeyCode::Enter => InputResult::Action(Action::NextField),
        _ => InputResult::Continue,
    }
}

fn handle_choice_input(key: KeyEvent, bindings: &KeyBindings) -> InputResult {
    if let Some(action) = bindings.get(&key) {
        return match action {
            Action::Down => InputResult::Action(Action::SelectNext),
            Action::Up => InputResult::Action(Action::SelectPrev),
            action => action_result(action),
        };
    }

    match key.code {
        KeyCode::Right | KeyCode::Char(' ') => InputResult::Action(Action::SelectNext),
        KeyCode::Left => InputResult::Action(Action::SelectPrev),
        KeyCode::Enter => InputResult::Action(Action::NextField),
        _ => InputResult::Continue,
    }
}

fn handle_help_input(key: KeyEvent, bindings: &KeyBindings) -> InputResult {
    // In help modal: scroll, Esc/F1/q closes
    if let Some(action) = bindings.get(&key) {
        match action {
            Action::Up | Action::PrevField => return InputResult::Action(Action::Up),
            Action::Down | Action::NextField => return InputResult::Action(Action::Down),
            Action::Help | Action::Quit => return InputResult::Action(Action::Help),
            _ => {}
        }
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => InputResult::Action(Action::Help),
        KeyCode::Up => InputResult::Action(Action::Up),
        KeyCode::Down => InputResult::Action(Action::Down),
        _ => InputResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::ModalState;
    use crate::config::KeybindingMode;
    use crate::prompt::FieldId;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn state_focused(focus: Focus) -> AppState {
        let mut state = AppState::default();
        state.form.focus = focus;
        state
    }

    #[test]
    fn test_quit_action() {
        let bindings = KeyBindings::new(&KeybindingMode::Vim);
        let state = AppState::default();

        let result = handle_key(ctrl('q'), &state, &bindings);
        assert!(matches!(result, InputResult::Quit));
    }

    #[test]
    fn test_vim_letters_type_into_text_fields() {
        let bindings = KeyBindings::new(&KeybindingMode::Vim);
        let state = state_focused(Focus::Field(FieldId::Persona));

        for c in ['h', 'j', 'k', 'l', 'q'] {
            let result = handle_key(press(KeyCode::Char(c)), &state, &bindings);
            assert!(matches!(result, InputResult::Char(got) if got == c));
        }
    }

    #[test]
    fn test_shifted_char_is_typed() {
        let bindings = KeyBindings::new(&KeybindingMode::Vim);
        let state = AppState::default();
        let key = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);

        assert!(matches!(
            handle_key(key, &state, &bindings),
            InputResult::Char('W')
        ));
    }

    #[test]
    fn test_enter_in_prompt_editor_inserts_newline() {
        let bindings = KeyBindings::new(&KeybindingMode::Vim);

        let state = state_focused(Focus::Prompt);
        assert!(matches!(
            handle_key(press(KeyCode::Enter), &state, &bindings),
            InputResult::Char('\n')
        ));

        let state = state_focused(Focus::Field(FieldId::Objective));
        assert!(matches!(
            handle_key(press(KeyCode::Enter), &state, &bindings),
            InputResult::Action(Action::NextField)
        ));
    }

    #[test]
    fn test_choice_fields_cycle() {
        let bindings = KeyBindings::new(&KeybindingMode::Vim);
        let state = state_focused(Focus::Tone);

        assert!(matches!(
            handle_key(press(KeyCode::Char('l')), &state, &bindings),
            InputResult::Action(Action::SelectNext)
        ));
        assert!(matches!(
            handle_key(press(KeyCode::Left), &state, &bindings),
            InputResult::Action(Action::SelectPrev)
        ));
        assert!(matches!(
            handle_key(press(KeyCode::Char('j')), &state, &bindings),
            InputResult::Action(Action::SelectNext)
        ));
    }

    #[test]
    fn test_arrow_mode_left_right_ignored_in_text() {
        let bindings = KeyBindings::new(&KeybindingMode::Arrows);
        let state = state_focused(Focus::ApiKey);

        assert!(matches!(
            handle_key(press(KeyCode::Right), &state, &bindings),
            InputResult::Continue
        ));
        assert!(matches!(
            handle_key(press(KeyCode::Down), &state, &bindings),
            InputResult::Action(Action::NextField)
        ));
    }

    #[test]
    fn test_buttons_reachable_from_any_field() {
        let bindings = KeyBindings::new(&KeybindingMode::Vim);
        for focus in [Focus::ApiKey, Focus::Tone, Focus::Prompt] {
            let state = state_focused(focus);
            assert!(matches!(
                handle_key(ctrl('g'), &state, &bindings),
                InputResult::Action(Action::CreatePrompt)
            ));
            assert!(matches!(
                handle_key(ctrl('s'), &state, &bindings),
                InputResult::Action(Action::SubmitPrompt)
            ));
        }
    }

    #[test]
    fn test_help_modal_captures_keys() {
        let bindings = KeyBindings::new(&KeybindingMode::Vim);
        let mut state = AppState::default();
        state.modal = ModalState::Help {
            keybindings: Vec::new(),
            scroll: 0,
        };

        assert!(matches!(
            handle_key(press(KeyCode::Esc), &state, &bindings),
            InputResult::Action(Action::Help)
        ));
        assert!(matches!(
            handle_key(press(KeyCode::Char('j')), &state, &bindings),
            InputResult::Action(Action::Down)
        ));
        assert!(matches!(
            handle_key(press(KeyCode::Char('x')), &state, &bindings),
            InputResult::Continue
        ));
    }

    #[test]
    fn test_key_release_ignored() {
        let bindings = KeyBindings::new(&KeybindingMode::Vim);
        let state = AppState::default();
        let mut key = press(KeyCode::Char('a'));
        key.kind = KeyEventKind::Release;

        assert!(matches!(
            handle_input(Event::Key(key), &state, &bindings),
            InputResult::Continue
        ));
    }
}
