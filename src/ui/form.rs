//! Form widgets: the field block, API key, buttons, prompt editor and output panel

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::theme::{Theme, borders};
use super::widgets::{mask, sanitize_text, wrapped_height};
use crate::app::session::{Output, Phase};
use crate::app::state::{AppState, Focus};
use crate::constants::API_KEY_URL;
use crate::prompt::{FieldId, Temperature};

const CURSOR: &str = "│";
const LABEL_WIDTH: usize = 19;

fn input_block(title: &str, focused: bool) -> Block<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border_for(focused))
        .title(format!(" {} ", title));
    if focused {
        block.border_type(borders::input_focused())
    } else {
        block.border_type(borders::panel())
    }
}

/// Keep the end of `value` visible when it is wider than `width`
fn tail_fit(value: &str, width: usize) -> String {
    if value.width() <= width {
        return value.to_string();
    }
    let mut tail: Vec<char> = Vec::new();
    let mut used = 1; // leading ellipsis
    for c in value.chars().rev() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        tail.push(c);
    }
    std::iter::once('…').chain(tail.into_iter().rev()).collect()
}

fn with_cursor(value: &str, focused: bool) -> String {
    if focused {
        format!("{}{}", value, CURSOR)
    } else {
        value.to_string()
    }
}

fn row<'a>(label: &'a str, value: Vec<Span<'a>>, focused: bool) -> Line<'a> {
    let label_style = if focused {
        Theme::selected_bold()
    } else {
        Theme::label()
    };
    let mut spans = vec![Span::styled(
        format!(" {:<width$}", label, width = LABEL_WIDTH),
        label_style,
    )];
    spans.extend(value);
    Line::from(spans)
}

fn text_row<'a>(id: FieldId, value: &str, focused: bool, width: usize) -> Line<'a> {
    let style = if focused {
        Theme::text()
    } else {
        Theme::text_secondary()
    };
    let shown = tail_fit(value, width.saturating_sub(LABEL_WIDTH + 2));
    row(
        id.label(),
        vec![Span::styled(with_cursor(&shown, focused), style)],
        focused,
    )
}

fn tone_row<'a>(state: &AppState) -> Line<'a> {
    let focused = state.form.focus == Focus::Tone;
    let style = if focused {
        Theme::text_accent()
    } else {
        Theme::text()
    };
    row(
        "Tone",
        vec![
            Span::styled("◀ ", Theme::text_muted()),
            Span::styled(state.form.fields.tone.label(), style),
            Span::styled(" ▶", Theme::text_muted()),
        ],
        focused,
    )
}

fn temperature_row<'a>(state: &AppState) -> Line<'a> {
    let focused = state.form.focus == Focus::Temperature;
    let current = state.form.fields.temperature;
    let spans = Temperature::ALL
        .iter()
        .map(|&t| {
            let (marker, style) = if t == current {
                ("(•) ", if focused { Theme::text_accent() } else { Theme::text() })
            } else {
                ("( ) ", Theme::text_muted())
            };
            Span::styled(format!("{}{}  ", marker, t.label()), style)
        })
        .collect();
    row("Temperature", spans, focused)
}

fn focus_hint(focus: Focus) -> &'static str {
    match focus {
        Focus::ApiKey => "Needed to submit. Ctrl+O opens the page where you can create one.",
        Focus::Field(id) => id.hint(),
        Focus::Tone => "Tone the email should be written in",
        Focus::Temperature => "Lower is more predictable, higher is more varied",
        Focus::Prompt => "Edits here are sent exactly as written",
    }
}

pub fn render_form(frame: &mut Frame, area: Rect, state: &AppState) {
    let form_focused = !matches!(state.form.focus, Focus::ApiKey | Focus::Prompt);
    let block = input_block("Email Details", form_focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let mut lines: Vec<Line> = FieldId::ALL
        .iter()
        .map(|&id| {
            let focused = state.form.focus == Focus::Field(id);
            text_row(id, state.form.fields.get(id), focused, width)
        })
        .collect();
    lines.push(tone_row(state));
    lines.push(temperature_row(state));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(" {}", focus_hint(state.form.focus)),
        Theme::text_muted(),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn api_key_line(state: &AppState, width: usize) -> Line<'static> {
    let focused = state.form.focus == Focus::ApiKey;
    if state.form.api_key.is_empty() && !focused {
        return Line::from(Span::styled("(not set)", Theme::text_muted()));
    }
    let masked = tail_fit(&mask(&state.form.api_key), width.saturating_sub(1));
    Line::from(Span::styled(with_cursor(&masked, focused), Theme::text()))
}

/// Single-row API key input for terminals too narrow for the sidebar
pub fn render_api_key_field(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.form.focus == Focus::ApiKey;
    let block = input_block("OpenAI API Key (Ctrl+O to get one)", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(api_key_line(state, inner.width as usize)),
        inner,
    );
}

pub fn render_sidebar(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.form.focus == Focus::ApiKey;
    let block = input_block("OpenAI API Key", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        api_key_line(state, inner.width as usize),
        Line::from(""),
        Line::from(Span::styled("Get a key at", Theme::text_secondary())),
        Line::from(Span::styled(API_KEY_URL, Theme::text_link())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Ctrl+O", Theme::help_key()),
            Span::styled(" opens it in your browser", Theme::text_secondary()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "The key is only kept in memory.",
            Theme::text_muted(),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

pub fn render_buttons(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(" Create Prompt (Ctrl+G) ", Theme::button_primary()),
    ];
    if state.session.can_submit() {
        let style = if state.status.loading {
            Theme::button()
        } else {
            Theme::button_primary()
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(" Submit Prompt (Ctrl+S) ", style));
    }
    if state.status.loading {
        spans.push(Span::styled("  Submitting...", Theme::text_accent()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub fn render_prompt_editor(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.form.focus == Focus::Prompt;
    let prompt = state.session.prompt().unwrap_or_default();

    let title = format!(
        "Populated Prompt Template: Edit Prompt ({} chars)",
        prompt.chars().count()
    );
    let block = input_block(&title, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = with_cursor(prompt, focused);
    // Follow the cursor at the end of the text
    let overflow = wrapped_height(&text, inner.width).saturating_sub(inner.height as usize);
    let style = if focused {
        Theme::text()
    } else {
        Theme::text_secondary()
    };

    let paragraph = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: false })
        .scroll((overflow.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(paragraph, inner);
}

pub fn render_output(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = match state.session.phase() {
        Phase::Submitted => " Output (last submission) ",
        Phase::Unsubmitted | Phase::Compiled => " Output ",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (text, style): (String, Style) = match state.session.output() {
        Output::Empty => (
            "The generated email appears here after you submit.".to_string(),
            Theme::text_muted(),
        ),
        Output::Text(text) => (sanitize_text(text), Theme::text()),
        Output::Warning(msg) => (msg.clone(), Theme::text_warning()),
        Output::Error(msg) => (sanitize_text(msg), Theme::text_error()),
    };

    frame.render_widget(
        Paragraph::new(text).style(style).wrap(Wrap { trim: false }),
        inner,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_fit_keeps_end() {
        assert_eq!(tail_fit("short", 10), "short");
        assert_eq!(tail_fit("abcdefghij", 5), "…ghij");
        assert_eq!(tail_fit("abc", 0), "…");
    }

    #[test]
    fn test_focus_hints() {
        assert_eq!(
            focus_hint(Focus::Field(FieldId::Persona)),
            FieldId::Persona.hint()
        );
        assert!(focus_hint(Focus::ApiKey).contains("Ctrl+O"));
    }
}
