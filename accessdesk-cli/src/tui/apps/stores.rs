//! Stores screen: browse the franchise store inventory.
//!
//! Enter on a row hands the record off to the Profile screen through the
//! handoff store, the same channel the user pickers use.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::model::{ProfileRecord, StoreRecord};
use crate::services::filter;
use crate::services::handoff::SHARED_PROFILE_KEY;
use crate::tui::apps::common::{render_footer, render_rows, render_search, render_title};
use crate::tui::command::{Command, Screen};
use crate::tui::session::Session;
use crate::tui::widgets::{ListState, TextInputState};

const LIST_HEIGHT: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Search,
    #[default]
    List,
}

#[derive(Debug)]
pub struct State {
    pub search: TextInputState,
    pub list: ListState,
    pub focus: Focus,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    pub fn new() -> Self {
        Self {
            search: TextInputState::new(),
            list: ListState::with_cursor(),
            focus: Focus::default(),
        }
    }

    pub fn filtered<'a>(&self, session: &'a Session) -> Vec<&'a StoreRecord> {
        filter::search_stores(&session.catalog.stores, self.search.value())
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    FocusSearch,
    FocusList,
    SearchKey(KeyEvent),
    ListNavigate(KeyCode),
    /// Hand the highlighted store off to the Profile screen.
    OpenProfile,
}

pub fn handle_key(state: &State, key: KeyEvent) -> Option<Msg> {
    if state.focus == Focus::Search {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Msg::FocusList),
            _ => Some(Msg::SearchKey(key)),
        };
    }
    match key.code {
        KeyCode::Char('/') => Some(Msg::FocusSearch),
        KeyCode::Enter => Some(Msg::OpenProfile),
        KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown | KeyCode::Home
        | KeyCode::End | KeyCode::Char('j') | KeyCode::Char('k') => {
            Some(Msg::ListNavigate(key.code))
        }
        _ => None,
    }
}

pub fn update(state: &mut State, session: &mut Session, msg: Msg) -> Command<Msg> {
    match msg {
        Msg::FocusSearch => {
            state.focus = Focus::Search;
            Command::None
        }
        Msg::FocusList => {
            state.focus = Focus::List;
            Command::None
        }
        Msg::SearchKey(key) => {
            if state.search.handle_key(key) {
                let count = state.filtered(session).len();
                state.list.clamp(count);
            }
            Command::None
        }
        Msg::ListNavigate(code) => {
            let count = state.filtered(session).len();
            state.list.handle_key(code, count, LIST_HEIGHT);
            Command::None
        }
        Msg::OpenProfile => {
            let record = state
                .list
                .cursor()
                .and_then(|index| state.filtered(session).get(index).copied().cloned())
                .map(|store| store_profile(&store));
            let Some(record) = record else {
                return Command::None;
            };
            if let Err(err) = session.handoff.put(SHARED_PROFILE_KEY, &record) {
                log::warn!("store handoff failed: {err:#}");
                session.set_status(format!("Could not open profile: {err}"));
                return Command::None;
            }
            Command::Navigate(Screen::Profile)
        }
    }
}

/// Profile rendition of a store record for the handoff channel.
fn store_profile(store: &StoreRecord) -> ProfileRecord {
    ProfileRecord {
        first_name: String::new(),
        last_name: String::new(),
        email: String::new(),
        display_name: store.store_name.clone(),
        alias: store.store_number.clone(),
        phone: None,
        title: Some(store.brand.clone()),
        department: Some(store.region.clone()),
        start_date: None,
        user_type: Some("Store".into()),
        manager_email: None,
        tags: vec![store.status.clone()],
    }
}

pub fn view(frame: &mut Frame, area: Rect, state: &State, session: &Session) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(area);

    render_title(frame, chunks[0], "Stores", &session.theme);
    render_search(
        frame,
        chunks[1],
        "Search Stores",
        &state.search,
        state.focus == Focus::Search,
        &session.theme,
    );

    let rows: Vec<String> = state
        .filtered(session)
        .iter()
        .map(|store| {
            format!(
                "{:<28} {:<8} {:<20} {:<12} {:<12} {}",
                store.store_name,
                store.store_number,
                store.location,
                store.brand,
                store.region,
                store.status
            )
        })
        .collect();
    render_rows(
        frame,
        chunks[2],
        "Store Inventory",
        &rows,
        &state.list,
        state.focus == Focus::List,
        &session.theme,
        "No stores found",
    );

    render_footer(
        frame,
        chunks[3],
        &[
            ("/", "search"),
            ("Enter", "open profile"),
            ("Esc", "home"),
        ],
        session.status.as_deref(),
        &session.theme,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn setup() -> (State, Session) {
        (State::new(), Session::for_tests())
    }

    #[test]
    fn test_search_narrows_inventory() {
        let (mut state, mut session) = setup();
        assert_eq!(state.filtered(&session).len(), 6);
        update(&mut state, &mut session, Msg::FocusSearch);
        for c in "northeast".chars() {
            update(
                &mut state,
                &mut session,
                Msg::SearchKey(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
            );
        }
        assert_eq!(state.filtered(&session).len(), 2);
    }

    #[test]
    fn test_open_profile_writes_handoff_and_navigates() {
        use crate::services::Handoff;

        let (mut state, mut session) = setup();
        let dir = tempfile::tempdir().unwrap();
        session.handoff = Handoff::new(dir.path().to_path_buf());

        let command = update(&mut state, &mut session, Msg::OpenProfile);
        assert!(matches!(command, Command::Navigate(Screen::Profile)));
        let record: ProfileRecord = session
            .handoff
            .get(SHARED_PROFILE_KEY)
            .expect("handoff written");
        assert_eq!(record.display_name, session.catalog.stores[0].store_name);
    }
}
