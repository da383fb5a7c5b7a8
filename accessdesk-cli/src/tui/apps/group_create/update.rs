//! Key mapping and update logic for the Create Group wizard.

use std::path::Path;

use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent};

use super::msg::Msg;
use super::state::{DetailsField, Focus, SelectionMethod, State};
use crate::api::load_operations_users;
use crate::services::request::{GroupRequest, RequestDocument};
use crate::services::roster::load_roster;
use crate::tui::command::Command;
use crate::tui::session::Session;

const LIST_HEIGHT: usize = 12;

/// Map a raw key press to a message. Returns None for keys this screen
/// does not consume (the runtime then applies its global bindings).
pub fn handle_key(state: &State, key: KeyEvent) -> Option<Msg> {
    match state.wizard.current() {
        0 => handle_details_key(state, key),
        1 => handle_members_key(state, key),
        _ => match key.code {
            KeyCode::Char('b') => Some(Msg::Previous),
            KeyCode::Char('s') | KeyCode::Enter => Some(Msg::Submit),
            _ => None,
        },
    }
}

fn handle_details_key(state: &State, key: KeyEvent) -> Option<Msg> {
    match key.code {
        KeyCode::Tab | KeyCode::Down => Some(Msg::NextField),
        KeyCode::Enter => Some(Msg::Next),
        KeyCode::Char(' ') if state.details.field == DetailsField::Reviewer => {
            Some(Msg::ToggleReviewer)
        }
        KeyCode::Esc => None,
        _ => Some(Msg::FormKey(key)),
    }
}

fn handle_members_key(state: &State, key: KeyEvent) -> Option<Msg> {
    if state.focus == Focus::Search {
        return match key.code {
            KeyCode::Esc => Some(Msg::FocusList),
            KeyCode::Enter if state.method == SelectionMethod::Upload => Some(Msg::LoadRoster),
            KeyCode::Enter => Some(Msg::FocusList),
            KeyCode::Tab => Some(Msg::CycleMethod),
            _ => Some(Msg::SearchKey(key)),
        };
    }
    match key.code {
        KeyCode::Char('/') => Some(Msg::FocusSearch),
        KeyCode::Tab => Some(Msg::CycleMethod),
        KeyCode::Char('n') => Some(Msg::Next),
        KeyCode::Char('b') => Some(Msg::Previous),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Msg::ToggleCurrent),
        KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown | KeyCode::Home
        | KeyCode::End | KeyCode::Char('j') | KeyCode::Char('k') => {
            Some(Msg::ListNavigate(key.code))
        }
        _ => None,
    }
}

pub fn update(state: &mut State, session: &mut Session, msg: Msg) -> Command<Msg> {
    state.sync_validity();
    match msg {
        Msg::Next => {
            if state.wizard.next() {
                state.reset_picker();
                // First entry to the member step kicks off the
                // directory fetch.
                if state.wizard.current() == 1 && state.candidates.is_empty() && !state.loading {
                    state.loading = true;
                    let directory = session.directory.clone();
                    return Command::perform(async move {
                        Msg::MembersLoaded(load_operations_users(directory.as_ref()).await)
                    });
                }
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

        Msg::NextField => {
            state.details.field = state.details.field.next();
            Command::None
        }
        Msg::FormKey(key) => {
            if let Some(input) = state.details.active_input() {
                input.handle_key(key);
            }
            Command::None
        }
        Msg::ToggleReviewer => {
            state.details.owner_is_reviewer = !state.details.owner_is_reviewer;
            Command::None
        }

        Msg::CycleMethod => {
            state.method = state.method.next();
            state.reset_picker();
            if state.method == SelectionMethod::Upload {
                state.focus = Focus::Search;
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
            let input = match state.method {
                SelectionMethod::Upload => &mut state.path_input,
                _ => &mut state.search,
            };
            if input.handle_key(key) {
                let count = state.filtered_candidates().len();
                state.list.clamp(count);
            }
            Command::None
        }
        Msg::ListNavigate(code) => {
            let count = state.filtered_candidates().len();
            state.list.handle_key(code, count, LIST_HEIGHT);
            Command::None
        }
        Msg::ToggleCurrent => {
            let user = state
                .list
                .cursor()
                .and_then(|index| state.filtered_candidates().get(index).copied().cloned());
            if let Some(user) = user {
                state.members.toggle(user);
                state.sync_validity();
            }
            Command::None
        }
        Msg::LoadRoster => {
            match load_roster(Path::new(state.path_input.value().trim())) {
                Ok(entries) => {
                    session.set_status(format!("Roster parsed: {} members", entries.len()));
                    state.roster = Some(entries);
                    state.roster_error = None;
                    state.focus = Focus::List;
                }
                Err(err) => {
                    log::warn!("roster upload failed: {err:#}");
                    state.roster = None;
                    state.roster_error = Some(format!("{err}"));
                }
            }
            state.sync_validity();
            Command::None
        }
        Msg::MembersLoaded(users) => {
            state.loading = false;
            state.candidates = users;
            let count = state.filtered_candidates().len();
            state.list.clamp(count);
            Command::None
        }
    }
}

fn submit(state: &mut State, session: &mut Session) -> Command<Msg> {
    state.sync_validity();
    if !state.wizard.can_submit() {
        return Command::None;
    }
    let member_ids = match state.method {
        SelectionMethod::Upload => state
            .roster
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|entry| entry.email.clone())
            .collect(),
        _ => state
            .members
            .iter()
            .map(|user| user.id.clone())
            .collect(),
    };
    let request = GroupRequest {
        group_name: state.details.name.value().trim().to_string(),
        description: state.details.description.value().trim().to_string(),
        owner: state.details.owner.value().trim().to_string(),
        tags: state.details.parsed_tags(),
        owner_is_reviewer: state.details.owner_is_reviewer,
        member_ids,
        submitted_at: Utc::now(),
    };
    match session.sink.submit(RequestDocument::Group(request)) {
        Ok(receipt) => {
            // Reset-after-submit: the whole flow returns to a blank
            // details form.
            *state = State::new();
            session.set_status(format!("Group request {} submitted", receipt.id));
        }
        Err(err) => {
            log::error!("group request submit failed: {err:#}");
            session.set_status(format!("Submit failed: {err}"));
        }
    }
    Command::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    use crate::services::request::MemorySink;

    fn setup() -> (State, Session) {
        (State::new(), Session::for_tests())
    }

    fn type_into(state: &mut State, session: &mut Session, text: &str) {
        for c in text.chars() {
            update(
                state,
                session,
                Msg::FormKey(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
            );
        }
    }

    fn fill_details(state: &mut State, session: &mut Session) {
        type_into(state, session, "Northeast Ops");
        update(state, session, Msg::NextField);
        type_into(state, session, "Operations staff for the northeast region");
        update(state, session, Msg::NextField);
        type_into(state, session, "jdoe");
    }

    #[test]
    fn test_next_blocked_until_details_complete() {
        let (mut state, mut session) = setup();
        update(&mut state, &mut session, Msg::Next);
        assert_eq!(state.wizard.current(), 0);

        // Name alone is not enough.
        type_into(&mut state, &mut session, "Northeast Ops");
        update(&mut state, &mut session, Msg::Next);
        assert_eq!(state.wizard.current(), 0);
    }

    #[tokio::test]
    async fn test_entering_member_step_loads_candidates() {
        let (mut state, mut session) = setup();
        fill_details(&mut state, &mut session);
        let command = update(&mut state, &mut session, Msg::Next);
        assert_eq!(state.wizard.current(), 1);
        assert!(state.loading);
        let Command::Perform(future) = command else {
            panic!("expected a directory fetch");
        };
        let msg = future.await;
        update(&mut state, &mut session, msg);
        assert!(!state.loading);
        assert_eq!(state.candidates.len(), 6);
    }

    #[test]
    fn test_specific_method_is_search_gated() {
        let (mut state, mut session) = setup();
        state.candidates = session.catalog.users.clone();
        state.wizard.set_valid(0, true);
        state.wizard.next();
        assert!(state.filtered_candidates().is_empty());

        update(&mut state, &mut session, Msg::FocusSearch);
        for c in "john".chars() {
            update(
                &mut state,
                &mut session,
                Msg::SearchKey(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
            );
        }
        assert_eq!(state.filtered_candidates().len(), 1);
    }

    #[test]
    fn test_select_each_lists_all_candidates() {
        let (mut state, mut session) = setup();
        state.candidates = session.catalog.users.clone();
        state.wizard.set_valid(0, true);
        state.wizard.next();
        update(&mut state, &mut session, Msg::CycleMethod);
        assert_eq!(state.method, SelectionMethod::SelectEach);
        assert_eq!(state.filtered_candidates().len(), 6);
    }

    #[test]
    fn test_member_toggle_gates_next() {
        let (mut state, mut session) = setup();
        state.candidates = session.catalog.users.clone();
        state.wizard.set_valid(0, true);
        state.wizard.next();
        update(&mut state, &mut session, Msg::CycleMethod);

        update(&mut state, &mut session, Msg::Next);
        assert_eq!(state.wizard.current(), 1);

        update(&mut state, &mut session, Msg::ToggleCurrent);
        assert_eq!(state.members.len(), 1);
        update(&mut state, &mut session, Msg::Next);
        assert_eq!(state.wizard.current(), 2);
    }

    #[test]
    fn test_upload_method_needs_parsed_roster() {
        let (mut state, mut session) = setup();
        state.wizard.set_valid(0, true);
        state.wizard.next();
        update(&mut state, &mut session, Msg::CycleMethod);
        update(&mut state, &mut session, Msg::CycleMethod);
        assert_eq!(state.method, SelectionMethod::Upload);

        update(&mut state, &mut session, Msg::Next);
        assert_eq!(state.wizard.current(), 1);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.csv");
        std::fs::write(&path, "name,email\nJohn Smith,john@example.com\n").unwrap();
        state.path_input.set_value(path.to_str().unwrap());
        update(&mut state, &mut session, Msg::LoadRoster);
        assert_eq!(state.roster.as_ref().unwrap().len(), 1);
        assert!(state.roster_error.is_none());

        update(&mut state, &mut session, Msg::Next);
        assert_eq!(state.wizard.current(), 2);
    }

    #[test]
    fn test_bad_roster_path_reports_error() {
        let (mut state, mut session) = setup();
        state.wizard.set_valid(0, true);
        state.wizard.next();
        state.method = SelectionMethod::Upload;
        state.path_input.set_value("/nonexistent/roster.csv");
        update(&mut state, &mut session, Msg::LoadRoster);
        assert!(state.roster.is_none());
        assert!(state.roster_error.is_some());
    }

    #[test]
    fn test_submit_resets_and_reaches_the_sink() {
        use std::sync::Arc;

        let (mut state, mut session) = setup();
        let sink = Arc::new(MemorySink::new());
        session.sink = Box::new(sink.clone());

        fill_details(&mut state, &mut session);
        state.details.owner_is_reviewer = true;
        state.details.tags.set_value("ops, northeast");
        state.candidates = session.catalog.users.clone();
        state.sync_validity();
        state.wizard.next();
        update(&mut state, &mut session, Msg::CycleMethod);
        update(&mut state, &mut session, Msg::ToggleCurrent);
        update(&mut state, &mut session, Msg::Next);
        assert_eq!(state.wizard.current(), 2);

        update(&mut state, &mut session, Msg::Submit);
        let submitted = sink.submitted();
        assert_eq!(submitted.len(), 1);
        match &submitted[0] {
            RequestDocument::Group(request) => {
                assert_eq!(request.group_name, "Northeast Ops");
                assert_eq!(request.owner, "jdoe");
                assert_eq!(request.tags, vec!["ops", "northeast"]);
                assert!(request.owner_is_reviewer);
                assert_eq!(request.member_ids, vec!["1"]);
            }
            other => panic!("unexpected document: {other:?}"),
        }
        assert_eq!(state.wizard.current(), 0);
        assert!(state.details.name.is_blank());
        assert!(state.members.is_empty());
    }

    #[test]
    fn test_submit_ignored_before_review_step() {
        let (mut state, mut session) = setup();
        fill_details(&mut state, &mut session);
        update(&mut state, &mut session, Msg::Submit);
        assert_eq!(state.wizard.current(), 0);
    }
}
