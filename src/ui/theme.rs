//! Centralized theming for the form
//!
//! Every color and style the UI uses comes from here.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;
use std::sync::RwLock;

use crate::config::ThemeVariant;

/// Global theme variant, set once from config at startup
static THEME_VARIANT: RwLock<ThemeVariant> = RwLock::new(ThemeVariant::Dark);

pub fn init_theme(variant: ThemeVariant) {
    if let Ok(mut guard) = THEME_VARIANT.write() {
        *guard = variant;
    }
}

pub fn current_theme() -> ThemeVariant {
    THEME_VARIANT.read().map(|g| *g).unwrap_or_default()
}

/// Border type helpers for different UI contexts
pub mod borders {
    use super::*;

    /// Popups and the focused input get rounded corners
    pub fn popup() -> BorderType {
        BorderType::Rounded
    }

    pub fn input_focused() -> BorderType {
        match current_theme() {
            ThemeVariant::Dark => BorderType::Rounded,
            ThemeVariant::HighContrast => BorderType::Thick,
        }
    }

    pub fn panel() -> BorderType {
        BorderType::Plain
    }
}

/// Color palette - colors that vary by theme
pub mod colors {
    use super::*;

    pub fn bg_selection() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Rgb(69, 71, 90),
            ThemeVariant::HighContrast => Color::Blue,
        }
    }

    pub fn bg_status() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::DarkGray,
            ThemeVariant::HighContrast => Color::Black,
        }
    }

    pub fn bg_error() -> Color {
        Color::Red
    }

    pub fn bg_help() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Rgb(24, 24, 37),
            ThemeVariant::HighContrast => Color::Black,
        }
    }

    pub fn fg_primary() -> Color {
        Color::White
    }

    pub fn fg_secondary() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Gray,
            ThemeVariant::HighContrast => Color::White,
        }
    }

    pub fn fg_muted() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::DarkGray,
            ThemeVariant::HighContrast => Color::Gray,
        }
    }

    pub fn fg_accent() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Cyan,
            ThemeVariant::HighContrast => Color::LightCyan,
        }
    }

    pub fn fg_warning() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Yellow,
            ThemeVariant::HighContrast => Color::LightYellow,
        }
    }

    pub fn fg_error() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Red,
            ThemeVariant::HighContrast => Color::LightRed,
        }
    }

    pub fn border() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::DarkGray,
            ThemeVariant::HighContrast => Color::Gray,
        }
    }

    pub fn border_focused() -> Color {
        fg_accent()
    }
}

pub struct Theme;

impl Theme {
    // === Selection Styles ===

    pub fn selected() -> Style {
        Style::default()
            .bg(colors::bg_selection())
            .fg(colors::fg_primary())
    }

    pub fn selected_bold() -> Style {
        Self::selected().add_modifier(Modifier::BOLD)
    }

    // === Text Styles ===

    pub fn text() -> Style {
        Style::default().fg(colors::fg_primary())
    }

    pub fn text_secondary() -> Style {
        Style::default().fg(colors::fg_secondary())
    }

    pub fn text_muted() -> Style {
        Style::default().fg(colors::fg_muted())
    }

    pub fn text_accent() -> Style {
        Style::default().fg(colors::fg_accent())
    }

    pub fn text_warning() -> Style {
        Style::default().fg(colors::fg_warning())
    }

    pub fn text_error() -> Style {
        Style::default().fg(colors::fg_error())
    }

    pub fn text_link() -> Style {
        Style::default()
            .fg(colors::fg_accent())
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Field labels in the form
    pub fn label() -> Style {
        Style::default()
            .fg(colors::fg_secondary())
            .add_modifier(Modifier::BOLD)
    }

    // === Status Bar ===

    pub fn status_bar() -> Style {
        Style::default()
            .bg(colors::bg_status())
            .fg(colors::fg_primary())
    }

    pub fn error_bar() -> Style {
        Style::default()
            .bg(colors::bg_error())
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn help_key() -> Style {
        Style::default()
            .fg(colors::fg_accent())
            .add_modifier(Modifier::BOLD)
    }

    pub fn help_desc() -> Style {
        Style::default().fg(colors::fg_secondary())
    }

    pub fn help_bg() -> Style {
        Style::default().bg(colors::bg_help())
    }

    // === Borders ===

    pub fn border() -> Style {
        Style::default().fg(colors::border())
    }

    pub fn border_focused() -> Style {
        Style::default().fg(colors::border_focused())
    }

    /// Border for a block, highlighted when it owns focus
    pub fn border_for(focused: bool) -> Style {
        if focused {
            Self::border_focused()
        } else {
            Self::border()
        }
    }

    // === Buttons ===

    pub fn button() -> Style {
        Style::default()
            .fg(colors::fg_primary())
            .bg(colors::bg_status())
    }

    pub fn button_primary() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(colors::fg_accent())
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_for_focus() {
        assert_eq!(Theme::border_for(true), Theme::border_focused());
        assert_eq!(Theme::border_for(false), Theme::border());
    }
}
