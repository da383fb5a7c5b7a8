//! Profile screen: renders the record handed off by another screen.
//!
//! The record is re-read from the handoff store each time the screen is
//! entered; absence or a corrupt file falls back to the static default
//! profile rather than erroring.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::ProfileRecord;
use crate::services::handoff::SHARED_PROFILE_KEY;
use crate::tui::apps::common::{render_footer, render_title};
use crate::tui::command::Command;
use crate::tui::session::Session;
use crate::tui::theme::Theme;

#[derive(Debug, Default)]
pub struct State {
    pub record: ProfileRecord,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-read the handed-off record. Called by the runtime on entry.
    pub fn refresh(&mut self, session: &Session) {
        self.record = session
            .handoff
            .get_or(SHARED_PROFILE_KEY, ProfileRecord::default());
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    /// Drop the handed-off record and show the default profile.
    ClearHandoff,
}

pub fn handle_key(_state: &State, key: KeyEvent) -> Option<Msg> {
    match key.code {
        KeyCode::Char('x') => Some(Msg::ClearHandoff),
        _ => None,
    }
}

pub fn update(state: &mut State, session: &mut Session, msg: Msg) -> Command<Msg> {
    match msg {
        Msg::ClearHandoff => {
            session.handoff.remove(SHARED_PROFILE_KEY);
            state.refresh(session);
            Command::None
        }
    }
}

fn field<'a>(label: &'a str, value: &str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:<16}"), theme.muted()),
        Span::raw(value.to_string()),
    ])
}

pub fn view(frame: &mut Frame, area: Rect, state: &State, session: &Session) {
    let theme = &session.theme;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(area);

    render_title(frame, chunks[0], "Profile", theme);

    let record = &state.record;
    let none = "-";
    let lines = vec![
        Line::from(Span::styled(
            record.display_name.clone(),
            theme.title_style(),
        )),
        Line::default(),
        field("Alias", &record.alias, theme),
        field("Email", &record.email, theme),
        field("Phone", record.phone.as_deref().unwrap_or(none), theme),
        field("Title", record.title.as_deref().unwrap_or(none), theme),
        field(
            "Department",
            record.department.as_deref().unwrap_or(none),
            theme,
        ),
        field(
            "Start date",
            record.start_date.as_deref().unwrap_or(none),
            theme,
        ),
        field(
            "User type",
            record.user_type.as_deref().unwrap_or(none),
            theme,
        ),
        field(
            "Manager",
            record.manager_email.as_deref().unwrap_or(none),
            theme,
        ),
        field("Tags", &record.tags.join(", "), theme),
    ];
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(paragraph, chunks[1]);

    render_footer(
        frame,
        chunks[2],
        &[("x", "clear handoff"), ("Esc", "home")],
        session.status.as_deref(),
        theme,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::Handoff;

    fn setup() -> (State, Session, tempfile::TempDir) {
        let mut session = Session::for_tests();
        let dir = tempfile::tempdir().unwrap();
        session.handoff = Handoff::new(dir.path().to_path_buf());
        (State::new(), session, dir)
    }

    #[test]
    fn test_refresh_without_handoff_shows_default() {
        let (mut state, session, _guard) = setup();
        state.refresh(&session);
        assert_eq!(state.record.display_name, "John Doe");
    }

    #[test]
    fn test_refresh_reads_handed_off_record() {
        let (mut state, session, _guard) = setup();
        let record = ProfileRecord::from_user(&session.catalog.users[5]);
        session.handoff.put(SHARED_PROFILE_KEY, &record).unwrap();
        state.refresh(&session);
        assert_eq!(state.record.display_name, "Diana Prince");
    }

    #[test]
    fn test_clear_handoff_returns_to_default() {
        let (mut state, mut session, _guard) = setup();
        let record = ProfileRecord::from_user(&session.catalog.users[0]);
        session.handoff.put(SHARED_PROFILE_KEY, &record).unwrap();
        state.refresh(&session);
        assert_eq!(state.record.display_name, "John Smith");

        update(&mut state, &mut session, Msg::ClearHandoff);
        assert_eq!(state.record.display_name, "John Doe");
    }
}
