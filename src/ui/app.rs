//! Screen layout: sidebar, form, prompt editor, output, and the bottom bar

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use super::form::{
    render_api_key_field, render_buttons, render_form, render_output, render_prompt_editor,
    render_sidebar,
};
use super::help::render_help;
use super::widgets::{error_bar, help_bar, status_bar};
use crate::app::state::{AppState, Focus, ModalState};
use crate::constants::{APP_TITLE, MIN_SIDEBAR_VIEW_WIDTH, SIDEBAR_WIDTH};

/// Rows taken by the form block: nine fields, tone, temperature, a gap, the hint, borders
const FORM_HEIGHT: u16 = 9 + 2 + 2 + 2;

struct MainLayout {
    status_area: Rect,
    api_key_area: Option<Rect>,
    form_area: Rect,
    buttons_area: Rect,
    prompt_area: Option<Rect>,
    output_area: Rect,
    help_area: Rect,
}

fn compute_layout(area: Rect, inline_api_key: bool, prompt_visible: bool) -> MainLayout {
    let mut constraints = vec![Constraint::Length(1)]; // Status bar
    if inline_api_key {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Length(FORM_HEIGHT));
    constraints.push(Constraint::Length(1)); // Buttons
    if prompt_visible {
        constraints.push(Constraint::Min(6)); // Prompt editor
    }
    constraints.push(Constraint::Min(4)); // Output
    constraints.push(Constraint::Length(1)); // Help bar

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut rows = chunks.iter().copied();
    let mut next = || rows.next().unwrap_or_default();

    MainLayout {
        status_area: next(),
        api_key_area: inline_api_key.then(&mut next),
        form_area: next(),
        buttons_area: next(),
        prompt_area: prompt_visible.then(&mut next),
        output_area: next(),
        help_area: next(),
    }
}

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let show_sidebar = area.width >= MIN_SIDEBAR_VIEW_WIDTH;

    let main_area = if show_sidebar {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(area);
        render_sidebar(frame, columns[0], state);
        columns[1]
    } else {
        area
    };

    let layout = compute_layout(main_area, !show_sidebar, state.prompt_visible());

    status_bar(frame, layout.status_area, APP_TITLE, &state.status.message);
    if let Some(api_key_area) = layout.api_key_area {
        render_api_key_field(frame, api_key_area, state);
    }
    render_form(frame, layout.form_area, state);
    render_buttons(frame, layout.buttons_area, state);
    if let Some(prompt_area) = layout.prompt_area {
        render_prompt_editor(frame, prompt_area, state);
    }
    render_output(frame, layout.output_area, state);

    if let Some(ref error) = state.status.error {
        error_bar(frame, layout.help_area, error);
    } else {
        help_bar(frame, layout.help_area, &hints(state));
    }

    if let ModalState::Help {
        keybindings,
        scroll,
    } = &state.modal
    {
        render_help(frame, area, keybindings, *scroll);
    }
}

fn hints(state: &AppState) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();
    if !state.form.focus.is_text() {
        hints.push(("←/→", "change"));
    } else if state.form.focus == Focus::Prompt {
        hints.push(("Enter", "newline"));
    }
    hints.push(("Tab", "next"));
    hints.push(("Ctrl+G", "create"));
    if state.session.can_submit() {
        hints.push(("Ctrl+S", "submit"));
    }
    hints.push(("Ctrl+U", "clear"));
    hints.push(("F1", "help"));
    hints.push(("Ctrl+Q", "quit"));
    hints
}
