//! Home screen: the portal menu.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::tui::apps::common::{render_footer, render_rows, render_title};
use crate::tui::command::{Command, Screen};
use crate::tui::session::Session;
use crate::tui::widgets::ListState;

/// Screens reachable from the menu, in display order (every screen but
/// Home itself).
fn entries() -> &'static [Screen] {
    &Screen::ALL[1..]
}

fn description(screen: Screen) -> &'static str {
    match screen {
        Screen::AccessRequest => "Request application access for users and groups",
        Screen::GroupCreate => "Create a user group from the directory or a roster",
        Screen::Stores => "Browse the store inventory",
        Screen::Roles => "Browse the administrative role catalogue",
        Screen::Profile => "View the shared profile record",
        Screen::Home => "",
    }
}

#[derive(Debug)]
pub struct State {
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
            list: ListState::with_cursor(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    ListNavigate(KeyCode),
    Open,
}

pub fn handle_key(_state: &State, key: KeyEvent) -> Option<Msg> {
    match key.code {
        KeyCode::Enter => Some(Msg::Open),
        KeyCode::Up | KeyCode::Down | KeyCode::Home | KeyCode::End | KeyCode::Char('j')
        | KeyCode::Char('k') => Some(Msg::ListNavigate(key.code)),
        _ => None,
    }
}

pub fn update(state: &mut State, _session: &mut Session, msg: Msg) -> Command<Msg> {
    match msg {
        Msg::ListNavigate(code) => {
            state.list.handle_key(code, entries().len(), entries().len());
            Command::None
        }
        Msg::Open => match state.list.cursor().and_then(|index| entries().get(index)) {
            Some(screen) => Command::Navigate(*screen),
            None => Command::None,
        },
    }
}

pub fn view(frame: &mut Frame, area: Rect, state: &State, session: &Session) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(area);

    render_title(frame, chunks[0], "accessdesk", &session.theme);

    let rows: Vec<String> = entries()
        .iter()
        .map(|screen| format!("{:<18} {}", screen.title(), description(*screen)))
        .collect();
    render_rows(
        frame,
        chunks[1],
        "Portal",
        &rows,
        &state.list,
        true,
        &session.theme,
        "",
    );

    render_footer(
        frame,
        chunks[2],
        &[("Enter", "open"), ("j/k", "move"), ("q", "quit")],
        session.status.as_deref(),
        &session.theme,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_opens_the_highlighted_screen() {
        let mut state = State::new();
        let mut session = Session::for_tests();
        update(&mut state, &mut session, Msg::ListNavigate(KeyCode::Down));
        let command = update(&mut state, &mut session, Msg::Open);
        assert!(matches!(command, Command::Navigate(Screen::GroupCreate)));
    }
}
