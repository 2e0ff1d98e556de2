//! Common UI widgets and utilities

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use super::theme::Theme;

pub fn status_bar(frame: &mut Frame, area: Rect, left: &str, right: &str) {
    let style = Theme::status_bar();

    let used = left.width() + right.width() + 4;
    let padding = " ".repeat((area.width as usize).saturating_sub(used));

    let line = Line::from(vec![
        Span::styled(format!(" {} ", left), style),
        Span::styled(padding, style),
        Span::styled(format!(" {} ", right), style),
    ]);

    frame.render_widget(Paragraph::new(line).style(style), area);
}

pub fn error_bar(frame: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(format!(" Error: {} ", message)).style(Theme::error_bar());
    frame.render_widget(paragraph, area);
}

/// Render as many `(key, description)` hints as fit the width
pub fn help_bar(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let available_width = area.width as usize;

    // Format: " key desc │" with a separator between hints
    let mut total_width = 0;
    let mut hints_to_show = 0;
    for (i, (key, desc)) in hints.iter().enumerate() {
        let base = key.width() + 2 + desc.width();
        let width = if i + 1 < hints.len() { base + 3 } else { base + 1 };
        if total_width + width > available_width {
            break;
        }
        total_width += width;
        hints_to_show += 1;
    }

    // Show at least one hint if possible
    hints_to_show = hints_to_show.max(1).min(hints.len());

    let mut spans: Vec<Span> = Vec::new();
    for (i, (key, desc)) in hints.iter().take(hints_to_show).enumerate() {
        spans.push(Span::styled(format!(" {} ", key), Theme::help_key()));
        spans.push(Span::styled(desc.to_string(), Theme::help_desc()));
        if i + 1 < hints_to_show {
            spans.push(Span::styled(" │ ", Theme::text_muted()));
        }
    }
    spans.push(Span::styled(" ", Theme::text_muted()));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Replace every character with `*`
pub fn mask(secret: &str) -> String {
    "*".repeat(secret.chars().count())
}

/// Rows `text` occupies when wrapped at `width` columns
pub fn wrapped_height(text: &str, width: u16) -> usize {
    let width = width.max(1) as usize;
    text.split('\n')
        .map(|line| line.width().div_ceil(width).max(1))
        .sum()
}

/// Sanitize text for display: remove control characters and ANSI escape sequences
pub fn sanitize_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        // ANSI escape sequence (ESC [ ... letter)
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for ch in chars.by_ref() {
                if ch.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        // Other control characters (except newline and tab) become spaces
        if c.is_control() && c != '\n' && c != '\t' {
            result.push(' ');
        } else {
            result.push(c);
        }
    }

    result
}
