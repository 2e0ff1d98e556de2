//! Keybinding help overlay

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
};

use super::components::centered_rect_constrained;
use super::theme::{Theme, borders};
use crate::input::KeybindingEntry;

const KEY_WIDTH: usize = 14;

pub fn render_help(frame: &mut Frame, area: Rect, keys: &[KeybindingEntry], scroll: usize) {
    let popup_area = centered_rect_constrained(area, 36, 56, 10, 40);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Help ")
        .title_bottom(" ↑/↓ scroll │ F1 or Esc close ")
        .borders(Borders::ALL)
        .border_type(borders::popup())
        .border_style(Theme::border_focused())
        .style(Theme::help_bg());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let mut items: Vec<ListItem> = Vec::new();
    let mut current_category: Option<&str> = None;

    for entry in keys {
        if current_category != Some(entry.category) {
            if current_category.is_some() {
                items.push(ListItem::new(Line::from("")));
            }
            let rule_len = inner.width.saturating_sub(entry.category.len() as u16 + 4) as usize;
            items.push(ListItem::new(Line::from(vec![
                Span::styled(
                    format!("── {} ", entry.category),
                    Theme::text_secondary().add_modifier(Modifier::BOLD),
                ),
                Span::styled("─".repeat(rule_len), Theme::border()),
            ])));
            current_category = Some(entry.category);
        }

        items.push(ListItem::new(Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled(
                format!("{:<width$}", entry.key, width = KEY_WIDTH),
                Theme::text_accent(),
            ),
            Span::styled(entry.description.as_str(), Theme::text()),
        ])));
    }

    let visible: Vec<ListItem> = items.into_iter().skip(scroll).collect();
    frame.render_widget(List::new(visible), inner);
}
