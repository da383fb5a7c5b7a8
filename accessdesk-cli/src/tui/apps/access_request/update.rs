//! Key mapping and update logic for the Access Request wizard.

use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent};

use super::msg::Msg;
use super::state::{AccessPane, Focus, State, UserTab};
use crate::model::{Location, ProfileRecord};
use crate::services::handoff::SHARED_PROFILE_KEY;
use crate::services::request::{AccessRequest, RequestDocument};
use crate::tui::command::{Command, Screen};
use crate::tui::session::Session;

const LIST_HEIGHT: usize = 14;

/// Map a raw key press to a message. Returns None for keys this screen
/// does not consume (the runtime then applies its global bindings).
pub fn handle_key(state: &State, key: KeyEvent) -> Option<Msg> {
    if state.focus == Focus::Search {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Msg::FocusList),
            KeyCode::Tab => Some(Msg::CycleTab),
            _ => Some(Msg::SearchKey(key)),
        };
    }
    match key.code {
        KeyCode::Char('/') => Some(Msg::FocusSearch),
        KeyCode::Tab => Some(Msg::CycleTab),
        KeyCode::Char('n') => Some(Msg::Next),
        KeyCode::Char('b') => Some(Msg::Previous),
        KeyCode::Char('s') => Some(Msg::Submit),
        KeyCode::Char('o') => Some(Msg::OpenProfile),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Msg::ToggleCurrent),
        KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown | KeyCode::Home
        | KeyCode::End | KeyCode::Char('j') | KeyCode::Char('k') => {
            Some(Msg::ListNavigate(key.code))
        }
        _ => None,
    }
}

pub fn update(state: &mut State, session: &mut Session, msg: Msg) -> Command<Msg> {
    state.sync_validity(session);
    match msg {
        Msg::Next => {
            if state.wizard.next() {
                state.reset_picker();
            }
            Command::None
        }
        Msg::Previous => {
            if state.wizard.previous() {
                state.reset_picker();
            }
            Command::None
        }
        Msg::Submit => submit(state, session),

        Msg::CycleTab => {
            match state.wizard.current() {
                0 => {
                    state.user_tab = state.user_tab.next();
                    state.reset_picker();
                }
                1 => {
                    state.location_tab = state.location_tab.next();
                    state.reset_picker();
                }
                _ => {
                    state.access_pane = match state.access_pane {
                        AccessPane::Applications => AccessPane::Entitlements,
                        AccessPane::Entitlements => AccessPane::Applications,
                    };
                    state.focus = Focus::List;
                }
            }
            Command::None
        }
        Msg::FocusSearch => {
            state.focus = Focus::Search;
            Command::None
        }
        Msg::FocusList => {
            state.focus = Focus::List;
            Command::None
        }
        Msg::SearchKey(key) => {
            let input = match (state.wizard.current(), state.access_pane) {
                (2, AccessPane::Applications) => &mut state.app_search,
                (2, AccessPane::Entitlements) => &mut state.ent_search,
                _ => &mut state.search,
            };
            if input.handle_key(key) {
                let count = state.active_list_len(session);
                active_list_mut(state).clamp(count);
            }
            Command::None
        }
        Msg::ListNavigate(code) => {
            let count = state.active_list_len(session);
            active_list_mut(state).handle_key(code, count, LIST_HEIGHT);
            Command::None
        }
        Msg::ToggleCurrent => {
            toggle_current(state, session);
            Command::None
        }
        Msg::OpenProfile => open_profile(state, session),
    }
}

fn active_list_mut(state: &mut State) -> &mut crate::tui::widgets::ListState {
    match (state.wizard.current(), state.access_pane) {
        (2, AccessPane::Applications) => &mut state.app_list,
        (2, AccessPane::Entitlements) => &mut state.ent_list,
        _ => &mut state.list,
    }
}

/// Toggle the row under the cursor in whichever selection store the
/// active picker feeds. The store is the single source of truth; the
/// list widget never remembers what is selected.
fn toggle_current(state: &mut State, session: &mut Session) {
    match state.wizard.current() {
        0 => match state.user_tab {
            UserTab::Search => {
                if let Some(user) = cursor_item(&state.filtered_users(session), &state.list) {
                    session.selections.users.toggle(user);
                }
            }
            UserTab::Groups => {
                if let Some(group) = cursor_item(&state.filtered_groups(session), &state.list) {
                    session.selections.groups.toggle(group);
                }
            }
        },
        1 => {
            use super::state::LocationTab;
            let location = match state.location_tab {
                LocationTab::Store => cursor_item(&state.filtered_stores(session), &state.list)
                    .map(|store| Location::from_store(&store)),
                LocationTab::Region => cursor_item(&state.filtered_regions(session), &state.list)
                    .map(|region| Location::from_region(&region)),
                LocationTab::CustomGroup => {
                    cursor_item(&state.filtered_custom_groups(session), &state.list)
                        .map(|group| Location::from_custom_group(&group))
                }
            };
            if let Some(location) = location {
                session.selections.locations.toggle(location);
            }
        }
        _ => match state.access_pane {
            AccessPane::Applications => {
                if let Some(app) = cursor_item(&state.filtered_apps(session), &state.app_list) {
                    session.selections.apps.toggle(app);
                    // The entitlement list just changed shape under its cursor.
                    let count = state.filtered_entitlements(session).len();
                    state.ent_list.clamp(count);
                }
            }
            AccessPane::Entitlements => {
                if let Some(ent) =
                    cursor_item(&state.filtered_entitlements(session), &state.ent_list)
                {
                    session.selections.entitlements.toggle(ent);
                }
            }
        },
    }
    state.sync_validity(session);
}

fn cursor_item<T: Clone>(filtered: &[&T], list: &crate::tui::widgets::ListState) -> Option<T> {
    list.cursor()
        .and_then(|index| filtered.get(index))
        .map(|item| (*item).clone())
}

fn submit(state: &mut State, session: &mut Session) -> Command<Msg> {
    state.sync_validity(session);
    if !state.wizard.can_submit() {
        return Command::None;
    }
    let selections = &session.selections;
    let request = AccessRequest {
        users: selections.users.items().to_vec(),
        groups: selections.groups.items().to_vec(),
        locations: selections.locations.items().to_vec(),
        apps: selections.apps.items().to_vec(),
        entitlements: selections.entitlements.items().to_vec(),
        submitted_at: Utc::now(),
    };
    match session.sink.submit(RequestDocument::Access(request)) {
        Ok(receipt) => {
            // Reset-after-submit: every store empties and the wizard
            // returns to its initial state.
            session.selections.clear_all();
            *state = State::new();
            session.set_status(format!("Access request {} submitted", receipt.id));
        }
        Err(err) => {
            log::error!("access request submit failed: {err:#}");
            session.set_status(format!("Submit failed: {err}"));
        }
    }
    Command::None
}

fn open_profile(state: &mut State, session: &mut Session) -> Command<Msg> {
    if state.wizard.current() != 0 || state.user_tab != UserTab::Search {
        return Command::None;
    }
    let Some(user) = cursor_item(&state.filtered_users(session), &state.list) else {
        return Command::None;
    };
    let record = ProfileRecord::from_user(&user);
    if let Err(err) = session.handoff.put(SHARED_PROFILE_KEY, &record) {
        log::warn!("profile handoff failed: {err:#}");
        session.set_status(format!("Could not open profile: {err}"));
        return Command::None;
    }
    Command::Navigate(Screen::Profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::request::MemorySink;

    fn setup() -> (State, Session) {
        (State::new(), Session::for_tests())
    }

    fn select_current(state: &mut State, session: &mut Session) {
        update(state, session, Msg::ToggleCurrent);
    }

    #[test]
    fn test_next_blocked_without_selection() {
        let (mut state, mut session) = setup();
        update(&mut state, &mut session, Msg::Next);
        assert_eq!(state.wizard.current(), 0);
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let (mut state, mut session) = setup();
        select_current(&mut state, &mut session);
        assert_eq!(session.selections.users.len(), 1);
        select_current(&mut state, &mut session);
        assert!(session.selections.users.is_empty());
    }

    #[test]
    fn test_group_tab_feeds_group_store() {
        let (mut state, mut session) = setup();
        update(&mut state, &mut session, Msg::CycleTab);
        assert_eq!(state.user_tab, UserTab::Groups);
        select_current(&mut state, &mut session);
        assert_eq!(session.selections.groups.len(), 1);
        assert!(session.selections.users.is_empty());
    }

    #[test]
    fn test_submit_ignored_before_final_step() {
        let (mut state, mut session) = setup();
        select_current(&mut state, &mut session);
        update(&mut state, &mut session, Msg::Submit);
        assert_eq!(state.wizard.current(), 0);
        assert_eq!(session.selections.users.len(), 1);
    }

    /// The full flow: John Smith -> store -> Active Directory ->
    /// Administrator -> submit resets everything.
    #[test]
    fn test_access_request_end_to_end() {
        let (mut state, mut session) = setup();

        // Step 0: first user in the fixture list is John Smith (id "1").
        select_current(&mut state, &mut session);
        assert_eq!(session.selections.users.items()[0].name, "John Smith");
        update(&mut state, &mut session, Msg::Next);
        assert_eq!(state.wizard.current(), 1);

        // Step 1: select the first store.
        select_current(&mut state, &mut session);
        assert_eq!(session.selections.locations.len(), 1);
        assert_eq!(
            session.selections.locations.items()[0].kind,
            crate::model::LocationKind::Store
        );
        update(&mut state, &mut session, Msg::Next);
        assert_eq!(state.wizard.current(), 2);

        // Step 2: select Active Directory, then the Administrator
        // entitlement the parent filter now exposes.
        select_current(&mut state, &mut session);
        assert_eq!(
            session.selections.apps.items()[0].application_name,
            "Active Directory"
        );
        update(&mut state, &mut session, Msg::CycleTab);
        assert_eq!(state.access_pane, AccessPane::Entitlements);
        assert_eq!(state.filtered_entitlements(&session).len(), 3);
        select_current(&mut state, &mut session);
        assert_eq!(
            session.selections.entitlements.items()[0].entitlement_name,
            "Administrator"
        );

        update(&mut state, &mut session, Msg::Submit);
        assert!(session.selections.is_empty());
        assert_eq!(state.wizard.current(), 0);
        assert_eq!(state.user_tab, UserTab::Search);
        assert!(session.status.as_deref().unwrap().contains("submitted"));
    }

    #[test]
    fn test_entitlements_gated_on_app_selection() {
        let (mut state, mut session) = setup();
        session.selections.users.add(session.catalog.users[0].clone());
        update(&mut state, &mut session, Msg::Next);
        let store = session.catalog.stores[0].clone();
        session.selections.locations.add(Location::from_store(&store));
        update(&mut state, &mut session, Msg::Next);
        assert!(state.filtered_entitlements(&session).is_empty());
    }

    #[test]
    fn test_submit_reaches_the_sink() {
        use std::sync::Arc;

        let (mut state, mut session) = setup();
        let sink = Arc::new(MemorySink::new());
        session.sink = Box::new(sink.clone());
        select_current(&mut state, &mut session);
        update(&mut state, &mut session, Msg::Next);
        select_current(&mut state, &mut session);
        update(&mut state, &mut session, Msg::Next);
        select_current(&mut state, &mut session);
        update(&mut state, &mut session, Msg::CycleTab);
        select_current(&mut state, &mut session);
        update(&mut state, &mut session, Msg::Submit);

        let submitted = sink.submitted();
        assert_eq!(submitted.len(), 1);
        match &submitted[0] {
            RequestDocument::Access(request) => {
                assert_eq!(request.users.len(), 1);
                assert_eq!(request.entitlements.len(), 1);
            }
            other => panic!("unexpected document: {other:?}"),
        }
        assert!(session.selections.is_empty());
        assert_eq!(state.wizard.current(), 0);
    }

    #[test]
    fn test_search_narrows_user_list() {
        use crossterm::event::{KeyEvent, KeyModifiers};

        let (mut state, mut session) = setup();
        update(&mut state, &mut session, Msg::FocusSearch);
        for c in "diana".chars() {
            update(
                &mut state,
                &mut session,
                Msg::SearchKey(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
            );
        }
        assert_eq!(state.filtered_users(&session).len(), 1);
        update(&mut state, &mut session, Msg::FocusList);
        select_current(&mut state, &mut session);
        assert_eq!(session.selections.users.items()[0].name, "Diana Prince");
    }
}
