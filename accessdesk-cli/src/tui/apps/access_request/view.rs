//! Rendering for the Access Request wizard.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::state::{AccessPane, Focus, LocationTab, State, UserTab};
use crate::tui::apps::common::{
    ChecklistRow, render_checklist, render_chips, render_footer, render_search,
    render_step_header, render_title,
};
use crate::tui::session::Session;

pub fn view(frame: &mut Frame, area: Rect, state: &State, session: &Session) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(3), // progress
            Constraint::Min(8),    // step body
            Constraint::Length(1), // footer
        ])
        .split(area);

    render_title(frame, chunks[0], "Access Request", &session.theme);
    render_step_header(frame, chunks[1], &state.wizard, &session.theme);

    match state.wizard.current() {
        0 => render_select_user(frame, chunks[2], state, session),
        1 => render_select_location(frame, chunks[2], state, session),
        _ => render_select_access(frame, chunks[2], state, session),
    }

    let mut hints: Vec<(&str, &str)> = vec![
        ("Tab", "switch tab"),
        ("/", "search"),
        ("Space", "select"),
    ];
    if state.wizard.current() > 0 {
        hints.push(("b", "back"));
    }
    if state.wizard.is_last() {
        hints.push(("s", "submit"));
    } else if state.wizard.can_advance() {
        hints.push(("n", "next"));
    }
    if state.wizard.current() == 0 && state.user_tab == UserTab::Search {
        hints.push(("o", "profile"));
    }
    hints.push(("Esc", "home"));
    render_footer(
        frame,
        chunks[3],
        &hints,
        session.status.as_deref(),
        &session.theme,
    );
}

fn tab_bar(frame: &mut Frame, area: Rect, labels: &[&str], active: usize, session: &Session) {
    let theme = &session.theme;
    let mut spans: Vec<Span> = Vec::new();
    for (index, label) in labels.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" │ ", theme.muted()));
        }
        let style = if index == active {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            theme.muted()
        };
        spans.push(Span::styled((*label).to_string(), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn picker_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tabs
            Constraint::Length(3), // search
            Constraint::Min(4),    // list
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

fn render_select_user(frame: &mut Frame, area: Rect, state: &State, session: &Session) {
    let (tabs_area, search_area, list_area) = picker_layout(area);
    tab_bar(
        frame,
        tabs_area,
        &[UserTab::Search.label(), UserTab::Groups.label()],
        state.user_tab as usize,
        session,
    );
    render_search(
        frame,
        search_area,
        "Search",
        &state.search,
        state.focus == Focus::Search,
        &session.theme,
    );

    let rows: Vec<ChecklistRow> = match state.user_tab {
        UserTab::Search => state
            .filtered_users(session)
            .iter()
            .map(|user| {
                ChecklistRow::new(
                    format!(
                        "{:<18} {:<8} {:<18} {:<8} {}",
                        user.name, user.emp_id, user.manager, user.store_code, user.brand
                    ),
                    session.selections.users.contains(&user.id),
                )
            })
            .collect(),
        UserTab::Groups => state
            .filtered_groups(session)
            .iter()
            .map(|group| {
                ChecklistRow::new(
                    format!(
                        "{:<20} {:>4} users   {}",
                        group.group_name, group.number_of_users, group.description
                    ),
                    session.selections.groups.contains(&group.id),
                )
            })
            .collect(),
    };
    render_checklist(
        frame,
        list_area,
        state.user_tab.label(),
        &rows,
        &state.list,
        state.focus == Focus::List,
        &session.theme,
        "No Data",
    );
}

fn render_select_location(frame: &mut Frame, area: Rect, state: &State, session: &Session) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // selected users/groups summary
            Constraint::Min(6),    // picker
        ])
        .split(area);

    let mut labels: Vec<String> = session
        .selections
        .users
        .iter()
        .map(|user| user.name.clone())
        .collect();
    labels.extend(
        session
            .selections
            .groups
            .iter()
            .map(|group| group.group_name.clone()),
    );
    render_chips(
        frame,
        chunks[0],
        "Selected Users & Groups",
        &labels,
        &session.theme,
    );

    let (tabs_area, search_area, list_area) = picker_layout(chunks[1]);
    tab_bar(
        frame,
        tabs_area,
        &[
            LocationTab::Store.label(),
            LocationTab::Region.label(),
            LocationTab::CustomGroup.label(),
        ],
        state.location_tab as usize,
        session,
    );
    render_search(
        frame,
        search_area,
        "Search",
        &state.search,
        state.focus == Focus::Search,
        &session.theme,
    );

    let locations = &session.selections.locations;
    let rows: Vec<ChecklistRow> = match state.location_tab {
        LocationTab::Store => state
            .filtered_stores(session)
            .iter()
            .map(|store| {
                ChecklistRow::new(
                    format!(
                        "{:<28} {:<8} {:<18} {}",
                        store.store_name, store.store_number, store.location, store.region
                    ),
                    locations.contains(&format!("store-{}", store.id)),
                )
            })
            .collect(),
        LocationTab::Region => state
            .filtered_regions(session)
            .iter()
            .map(|region| {
                ChecklistRow::new(
                    format!(
                        "{:<12} {:>4} stores   {}",
                        region.region_name, region.number_of_stores, region.states
                    ),
                    locations.contains(&format!("region-{}", region.id)),
                )
            })
            .collect(),
        LocationTab::CustomGroup => state
            .filtered_custom_groups(session)
            .iter()
            .map(|group| {
                ChecklistRow::new(
                    format!(
                        "{:<22} {:>4} stores   by {}",
                        group.group_name, group.number_of_stores, group.created_by
                    ),
                    locations.contains(&format!("group-{}", group.id)),
                )
            })
            .collect(),
    };
    render_checklist(
        frame,
        list_area,
        state.location_tab.label(),
        &rows,
        &state.list,
        state.focus == Focus::List,
        &session.theme,
        "No Data",
    );
}

fn render_select_access(frame: &mut Frame, area: Rect, state: &State, session: &Session) {
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Applications pane
    let app_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(panes[0]);
    let apps_focused = state.access_pane == AccessPane::Applications;
    render_search(
        frame,
        app_chunks[0],
        "Search Applications",
        &state.app_search,
        apps_focused && state.focus == Focus::Search,
        &session.theme,
    );
    let app_rows: Vec<ChecklistRow> = state
        .filtered_apps(session)
        .iter()
        .map(|app| {
            ChecklistRow::new(
                format!(
                    "{:<18} {:<18} {}",
                    app.application_name, app.application_type, app.owner
                ),
                session.selections.apps.contains(&app.id),
            )
        })
        .collect();
    render_checklist(
        frame,
        app_chunks[1],
        "Applications",
        &app_rows,
        &state.app_list,
        apps_focused && state.focus == Focus::List,
        &session.theme,
        "No applications found",
    );

    // Entitlements pane, gated on the application selection
    let ent_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(panes[1]);
    let ents_focused = state.access_pane == AccessPane::Entitlements;
    render_search(
        frame,
        ent_chunks[0],
        "Search Entitlements",
        &state.ent_search,
        ents_focused && state.focus == Focus::Search,
        &session.theme,
    );
    let empty_message = if session.selections.apps.is_empty() {
        "Select an application to view entitlements"
    } else {
        "No entitlements found"
    };
    let ent_rows: Vec<ChecklistRow> = state
        .filtered_entitlements(session)
        .iter()
        .map(|ent| {
            ChecklistRow::new(
                format!(
                    "{:<24} {:<10} {:<18} {}",
                    ent.entitlement_name,
                    ent.risk.label(),
                    ent.application_name,
                    ent.scope
                ),
                session.selections.entitlements.contains(&ent.id),
            )
            .with_color(session.theme.risk_color(ent.risk))
        })
        .collect();
    render_checklist(
        frame,
        ent_chunks[1],
        "Entitlements",
        &ent_rows,
        &state.ent_list,
        ents_focused && state.focus == Focus::List,
        &session.theme,
        empty_message,
    );
}
