//! Rendering helpers shared by the portal screens.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::services::wizard::Wizard;
use crate::tui::theme::Theme;
use crate::tui::widgets::{ListState, TextInputState};

/// One row of a selectable list: display text plus its derived checked
/// state (recomputed from the selection store every render).
pub struct ChecklistRow {
    pub text: String,
    pub checked: bool,
    pub color: Option<ratatui::style::Color>,
}

impl ChecklistRow {
    pub fn new(text: impl Into<String>, checked: bool) -> Self {
        Self {
            text: text.into(),
            checked,
            color: None,
        }
    }

    /// Tint unchecked rows, e.g. by entitlement risk.
    pub fn with_color(mut self, color: ratatui::style::Color) -> Self {
        self.color = Some(color);
        self
    }
}

fn block<'a>(title: &'a str, focused: bool, theme: &Theme) -> Block<'a> {
    let border = if focused {
        theme.border_focused
    } else {
        theme.border
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(title)
}

/// Progress header: `(1) Select User ── (2) Select Location ── ...` with
/// completed steps checked and the current step highlighted.
pub fn render_step_header(frame: &mut Frame, area: Rect, wizard: &Wizard, theme: &Theme) {
    let mut spans: Vec<Span> = Vec::new();
    for (index, title) in wizard.titles().iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled("  ──  ", theme.muted()));
        }
        let marker = if index < wizard.current() {
            "✓".to_string()
        } else {
            format!("{}", index + 1)
        };
        let style = if index == wizard.current() {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else if index < wizard.current() {
            Style::default().fg(theme.success)
        } else {
            theme.muted()
        };
        spans.push(Span::styled(format!("({marker}) {title}"), style));
    }
    let paragraph = Paragraph::new(Line::from(spans))
        .block(block("Progress", false, theme));
    frame.render_widget(paragraph, area);
}

pub fn render_search(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    input: &TextInputState,
    focused: bool,
    theme: &Theme,
) {
    let text = if input.value().is_empty() && !focused {
        Line::from(Span::styled("press / to search", theme.muted()))
    } else {
        Line::from(input.value().to_string())
    };
    let paragraph = Paragraph::new(text).block(block(title, focused, theme));
    frame.render_widget(paragraph, area);
    if focused {
        let x = area.x + 1 + input.cursor_column() as u16;
        frame.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

/// Render a checkbox list. Empty lists show `empty_message` instead,
/// matching the portal's empty states.
pub fn render_checklist(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    rows: &[ChecklistRow],
    list: &ListState,
    focused: bool,
    theme: &Theme,
    empty_message: &str,
) {
    if rows.is_empty() {
        let paragraph = Paragraph::new(Line::from(Span::styled(empty_message, theme.muted())))
            .block(block(title, focused, theme));
        frame.render_widget(paragraph, area);
        return;
    }

    let height = area.height.saturating_sub(2) as usize;
    let mut lines = Vec::new();
    for index in list.visible_range(rows.len(), height) {
        let row = &rows[index];
        let marker = if row.checked { "[x] " } else { "[ ] " };
        let mut style = Style::default().fg(row.color.unwrap_or(theme.text));
        if row.checked {
            style = style.fg(theme.success);
        }
        if focused && list.cursor() == Some(index) {
            style = style.patch(theme.selected_row_style());
        }
        lines.push(Line::from(Span::styled(
            format!("{marker}{}", row.text),
            style,
        )));
    }
    let counted = format!("{title} ({})", rows.len());
    let paragraph = Paragraph::new(lines).block(block(&counted, focused, theme));
    frame.render_widget(paragraph, area);
}

/// Render a plain browse list (no checkboxes).
pub fn render_rows(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    rows: &[String],
    list: &ListState,
    focused: bool,
    theme: &Theme,
    empty_message: &str,
) {
    if rows.is_empty() {
        let paragraph = Paragraph::new(Line::from(Span::styled(empty_message, theme.muted())))
            .block(block(title, focused, theme));
        frame.render_widget(paragraph, area);
        return;
    }

    let height = area.height.saturating_sub(2) as usize;
    let mut lines = Vec::new();
    for index in list.visible_range(rows.len(), height) {
        let mut style = Style::default().fg(theme.text);
        if focused && list.cursor() == Some(index) {
            style = style.patch(theme.selected_row_style());
        }
        lines.push(Line::from(Span::styled(rows[index].clone(), style)));
    }
    let counted = format!("{title} ({})", rows.len());
    let paragraph = Paragraph::new(lines).block(block(&counted, focused, theme));
    frame.render_widget(paragraph, area);
}

/// Compact summary of a selection store's contents ("chips").
pub fn render_chips(frame: &mut Frame, area: Rect, title: &str, labels: &[String], theme: &Theme) {
    let line = if labels.is_empty() {
        Line::from(Span::styled("none selected", theme.muted()))
    } else {
        Line::from(Span::raw(labels.join("  •  ")))
    };
    let counted = format!("{title} ({})", labels.len());
    let paragraph = Paragraph::new(line).block(block(&counted, false, theme));
    frame.render_widget(paragraph, area);
}

/// Footer: key hints on the left, transient status on the right.
pub fn render_footer(
    frame: &mut Frame,
    area: Rect,
    hints: &[(&str, &str)],
    status: Option<&str>,
    theme: &Theme,
) {
    let mut spans: Vec<Span> = Vec::new();
    for (index, (key, action)) in hints.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("[{key}]"),
            Style::default().fg(theme.accent),
        ));
        spans.push(Span::styled(format!(" {action}"), theme.muted()));
    }
    if let Some(status) = status {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            status.to_string(),
            Style::default().fg(theme.success),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub fn render_title(frame: &mut Frame, area: Rect, title: &str, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(title, theme.title_style()))),
        area,
    );
}
