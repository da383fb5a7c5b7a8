//! Roles screen: browse the administrative role catalogue by category.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{Role, RoleCategory};
use crate::tui::apps::common::{render_footer, render_rows, render_title};
use crate::tui::command::Command;
use crate::tui::session::Session;
use crate::tui::widgets::ListState;

const LIST_HEIGHT: usize = 12;

#[derive(Debug)]
pub struct State {
    pub category: RoleCategory,
    pub list: ListState,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    pub fn new() -> Self {
        Self {
            category: RoleCategory::Regional,
            list: ListState::with_cursor(),
        }
    }

    pub fn roles<'a>(&self, session: &'a Session) -> Vec<&'a Role> {
        session
            .catalog
            .roles
            .iter()
            .filter(|role| role.category == self.category)
            .collect()
    }

    pub fn highlighted<'a>(&self, session: &'a Session) -> Option<&'a Role> {
        self.list
            .cursor()
            .and_then(|index| self.roles(session).get(index).copied())
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    CycleCategory,
    ListNavigate(KeyCode),
}

pub fn handle_key(_state: &State, key: KeyEvent) -> Option<Msg> {
    match key.code {
        KeyCode::Tab | KeyCode::Left | KeyCode::Right => Some(Msg::CycleCategory),
        KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown | KeyCode::Home
        | KeyCode::End | KeyCode::Char('j') | KeyCode::Char('k') => {
            Some(Msg::ListNavigate(key.code))
        }
        _ => None,
    }
}

pub fn update(state: &mut State, session: &mut Session, msg: Msg) -> Command<Msg> {
    match msg {
        Msg::CycleCategory => {
            state.category = match state.category {
                RoleCategory::Regional => RoleCategory::Store,
                RoleCategory::Store => RoleCategory::Corporate,
                RoleCategory::Corporate => RoleCategory::Regional,
            };
            state.list = ListState::with_cursor();
            Command::None
        }
        Msg::ListNavigate(code) => {
            let count = state.roles(session).len();
            state.list.handle_key(code, count, LIST_HEIGHT);
            Command::None
        }
    }
}

pub fn view(frame: &mut Frame, area: Rect, state: &State, session: &Session) {
    let theme = &session.theme;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(area);

    render_title(frame, chunks[0], "Roles", theme);

    let mut spans: Vec<Span> = Vec::new();
    for (index, category) in RoleCategory::ALL.into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" │ ", theme.muted()));
        }
        let style = if category == state.category {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            theme.muted()
        };
        spans.push(Span::styled(category.label(), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[1]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[2]);

    let rows: Vec<String> = state
        .roles(session)
        .iter()
        .map(|role| format!("{:<28} {}", role.name, role.description))
        .collect();
    render_rows(
        frame,
        panes[0],
        state.category.label(),
        &rows,
        &state.list,
        true,
        theme,
        "No roles in this category",
    );

    let privilege_lines: Vec<Line> = match state.highlighted(session) {
        Some(role) => role
            .privileges
            .iter()
            .map(|privilege| {
                Line::from(vec![
                    Span::styled("• ", Style::default().fg(theme.accent)),
                    Span::raw(privilege.clone()),
                ])
            })
            .collect(),
        None => vec![Line::from(Span::styled(
            "Select a role to view its privileges",
            theme.muted(),
        ))],
    };
    let paragraph = Paragraph::new(privilege_lines).block(
        ratatui::widgets::Block::default()
            .borders(ratatui::widgets::Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title("Privileges"),
    );
    frame.render_widget(paragraph, panes[1]);

    render_footer(
        frame,
        chunks[3],
        &[("Tab", "category"), ("j/k", "move"), ("Esc", "home")],
        session.status.as_deref(),
        theme,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (State, Session) {
        (State::new(), Session::for_tests())
    }

    #[test]
    fn test_categories_partition_the_catalogue() {
        let (mut state, session) = setup();
        let mut total = 0;
        for _ in 0..RoleCategory::ALL.len() {
            total += state.roles(&session).len();
            state.category = match state.category {
                RoleCategory::Regional => RoleCategory::Store,
                RoleCategory::Store => RoleCategory::Corporate,
                RoleCategory::Corporate => RoleCategory::Regional,
            };
        }
        assert_eq!(total, session.catalog.roles.len());
    }

    #[test]
    fn test_cycle_resets_the_cursor() {
        let (mut state, mut session) = setup();
        update(&mut state, &mut session, Msg::ListNavigate(KeyCode::Down));
        assert_eq!(state.list.cursor(), Some(1));
        update(&mut state, &mut session, Msg::CycleCategory);
        assert_eq!(state.category, RoleCategory::Store);
        assert_eq!(state.list.cursor(), Some(0));
    }

    #[test]
    fn test_highlighted_follows_the_cursor() {
        let (mut state, mut session) = setup();
        let first = state.highlighted(&session).unwrap().name.clone();
        update(&mut state, &mut session, Msg::ListNavigate(KeyCode::Down));
        let second = state.highlighted(&session).unwrap().name.clone();
        assert_ne!(first, second);
    }
}
