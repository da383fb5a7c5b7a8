//! Portal color palette.

use ratatui::style::{Color, Modifier, Style};

use crate::model::Risk;

#[derive(Debug, Clone)]
pub struct Theme {
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Red,
            success: Color::Green,
            warning: Color::Yellow,
            danger: Color::LightRed,
            text: Color::White,
            text_secondary: Color::Gray,
            text_tertiary: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Red,
            highlight_bg: Color::Rgb(60, 30, 30),
        }
    }
}

impl Theme {
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected_row_style(&self) -> Style {
        Style::default()
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_tertiary)
    }

    pub fn risk_color(&self, risk: Risk) -> Color {
        match risk {
            Risk::High => self.danger,
            Risk::Medium => self.warning,
            Risk::Low => self.success,
        }
    }
}
