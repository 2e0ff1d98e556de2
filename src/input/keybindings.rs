use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use crate::config::KeybindingMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Navigation
    NextField,
    PrevField,
    Up,
    Down,

    // Choice fields (tone, temperature)
    SelectNext,
    SelectPrev,

    // Form buttons
    CreatePrompt,
    SubmitPrompt,

    // Editing
    ClearField,
    ResetForm,

    // Misc
    OpenKeyLink,
    Help,
    Quit,
}

pub struct KeyBindings {
    bindings: HashMap<KeyEvent, Action>,
}

/// A displayable keybinding entry
#[derive(Debug, Clone)]
pub struct KeybindingEntry {
    pub key: String,
    pub description: String,
    pub category: &'static str,
}

impl KeyBindings {
    pub fn new(mode: &KeybindingMode) -> Self {
        let mut bindings = Self::common_bindings();
        let mode_bindings = match mode {
            KeybindingMode::Vim => Self::vim_bindings(),
            KeybindingMode::Arrows => Self::arrow_bindings(),
        };
        bindings.extend(mode_bindings);
        Self { bindings }
    }

    pub fn get(&self, event: &KeyEvent) -> Option<Action> {
        self.bindings.get(event).copied()
    }

    /// Get all keybindings as displayable entries grouped by category
    pub fn all_bindings(&self) -> Vec<KeybindingEntry> {
        let mut entries: Vec<_> = self
            .bindings
            .iter()
            .map(|(event, action)| KeybindingEntry {
                key: format_key_event(event),
                description: action_description(action).to_string(),
                category: action_category(action),
            })
            .collect();

        entries.sort_by(|a, b| {
            category_order(a.category)
                .cmp(&category_order(b.category))
                .then_with(|| a.description.cmp(&b.description))
                .then_with(|| a.key.cmp(&b.key))
        });
        entries
    }

    /// Bindings shared by every mode. Only modified or non-printable keys,
    /// since printable keys type into the focused field.
    fn common_bindings() -> HashMap<KeyEvent, Action> {
        let mut map = HashMap::new();

        map.insert(key_code(KeyCode::Tab), Action::NextField);
        map.insert(shift_key_code(KeyCode::BackTab), Action::PrevField);
        map.insert(key_code(KeyCode::BackTab), Action::PrevField);

        map.insert(ctrl_key('g'), Action::CreatePrompt);
        map.insert(ctrl_key('s'), Action::SubmitPrompt);

        map.insert(ctrl_key('u'), Action::ClearField);
        map.insert(ctrl_key('r'), Action::ResetForm);

        map.insert(ctrl_key('o'), Action::OpenKeyLink);
        map.insert(key_code(KeyCode::F(1)), Action::Help);
        map.insert(ctrl_key('q'), Action::Quit);
        map.insert(ctrl_key('c'), Action::Quit);

        map
    }

    fn vim_bindings() -> HashMap<KeyEvent, Action> {
        let mut map = HashMap::new();

        map.insert(ctrl_key('n'), Action::NextField);
        map.insert(ctrl_key('p'), Action::PrevField);

        // Only reachable while a choice field has focus
        map.insert(key('l'), Action::SelectNext);
        map.insert(key('h'), Action::SelectPrev);
        map.insert(key('j'), Action::Down);
        map.insert(key('k'), Action::Up);

        map
    }

    fn arrow_bindings() -> HashMap<KeyEvent, Action> {
        let mut map = HashMap::new();

        map.insert(key_code(KeyCode::Down), Action::NextField);
        map.insert(key_code(KeyCode::Up), Action::PrevField);
        map.insert(key_code(KeyCode::Right), Action::SelectNext);
        map.insert(key_code(KeyCode::Left), Action::SelectPrev);
        map.insert(key_code(KeyCode::F(5)), Action::CreatePrompt);
        map.insert(key_code(KeyCode::F(6)), Action::SubmitPrompt);

        map
    }
}

fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn key_code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn shift_key_code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::SHIFT)
}

/// Format a KeyEvent for display
fn format_key_event(event: &KeyEvent) -> String {
    let mut parts = Vec::new();

    if event.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl+");
    }
    if event.modifiers.contains(KeyModifiers::SHIFT) && event.code != KeyCode::BackTab {
        parts.push("Shift+");
    }
    if event.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt+");
    }

    let key_str = match event.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => format!("{:?}", event.code),
    };

    format!("{}{}", parts.join(""), key_str)
}

fn action_description(action: &Action) -> &'static str {
    match action {
        Action::NextField => "Next field",
        Action::PrevField => "Previous field",
        Action::Up => "Scroll up",
        Action::Down => "Scroll down",
        Action::SelectNext => "Next option",
        Action::SelectPrev => "Previous option",
        Action::CreatePrompt => "Create prompt",
        Action::SubmitPrompt => "Submit prompt",
        Action::ClearField => "Clear field",
        Action::ResetForm => "Reset form",
        Action::OpenKeyLink => "Open API key page",
        Action::Help => "Toggle help",
        Action::Quit => "Quit",
    }
}

fn action_category(action: &Action) -> &'static str {
    match action {
        Action::NextField | Action::PrevField | Action::Up | Action::Down => "Navigation",
        Action::SelectNext | Action::SelectPrev => "Choices",
        Action::CreatePrompt | Action::SubmitPrompt => "Prompt",
        Action::ClearField | Action::ResetForm => "Editing",
        Action::OpenKeyLink | Action::Help | Action::Quit => "General",
    }
}

fn category_order(category: &str) -> u8 {
    match category {
        "Prompt" => 0,
        "Navigation" => 1,
        "Choices" => 2,
        "Editing" => 3,
        "General" => 4,
        _ => 99,
    }
}
