//! Rendering for the Create Group wizard.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::state::{DetailsField, Focus, SelectionMethod, State};
use crate::tui::apps::common::{
    ChecklistRow, render_checklist, render_chips, render_footer, render_search,
    render_step_header, render_title,
};
use crate::tui::session::Session;
use crate::tui::theme::Theme;

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

    render_title(frame, chunks[0], "Create Group", &session.theme);
    render_step_header(frame, chunks[1], &state.wizard, &session.theme);

    match state.wizard.current() {
        0 => render_details(frame, chunks[2], state, &session.theme),
        1 => render_members(frame, chunks[2], state, &session.theme),
        _ => render_review(frame, chunks[2], state, &session.theme),
    }

    let hints: Vec<(&str, &str)> = match state.wizard.current() {
        0 => vec![("Tab", "next field"), ("Space", "toggle"), ("Enter", "next"), ("Esc", "home")],
        1 => {
            let mut hints = vec![("Tab", "method"), ("/", "search"), ("Space", "select")];
            if state.method == SelectionMethod::Upload {
                hints[1] = ("/", "edit path");
            }
            hints.push(("b", "back"));
            if state.wizard.can_advance() {
                hints.push(("n", "next"));
            }
            hints.push(("Esc", "home"));
            hints
        }
        _ => vec![("s", "submit"), ("b", "back"), ("Esc", "home")],
    };
    render_footer(
        frame,
        chunks[3],
        &hints,
        session.status.as_deref(),
        &session.theme,
    );
}

fn field_box(
    frame: &mut Frame,
    area: Rect,
    field: DetailsField,
    value: &str,
    focused: bool,
    theme: &Theme,
) {
    let border = if focused {
        theme.border_focused
    } else {
        theme.border
    };
    let paragraph = Paragraph::new(Line::from(value.to_string())).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(field.label()),
    );
    frame.render_widget(paragraph, area);
}

fn render_details(frame: &mut Frame, area: Rect, state: &State, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // name
            Constraint::Length(3), // description
            Constraint::Length(3), // owner
            Constraint::Length(3), // tags
            Constraint::Length(1), // reviewer checkbox
            Constraint::Min(0),
        ])
        .split(area);

    let form = &state.details;
    field_box(
        frame,
        rows[0],
        DetailsField::Name,
        form.name.value(),
        form.field == DetailsField::Name,
        theme,
    );
    field_box(
        frame,
        rows[1],
        DetailsField::Description,
        form.description.value(),
        form.field == DetailsField::Description,
        theme,
    );
    field_box(
        frame,
        rows[2],
        DetailsField::Owner,
        form.owner.value(),
        form.field == DetailsField::Owner,
        theme,
    );
    field_box(
        frame,
        rows[3],
        DetailsField::Tags,
        form.tags.value(),
        form.field == DetailsField::Tags,
        theme,
    );

    let marker = if form.owner_is_reviewer { "[x]" } else { "[ ]" };
    let style = if form.field == DetailsField::Reviewer {
        theme.selected_row_style()
    } else {
        Style::default().fg(theme.text)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("{marker} {}", DetailsField::Reviewer.label()),
            style,
        ))),
        rows[4],
    );
}

fn method_bar(frame: &mut Frame, area: Rect, active: SelectionMethod, theme: &Theme) {
    let mut spans: Vec<Span> = Vec::new();
    for (index, method) in [
        SelectionMethod::Specific,
        SelectionMethod::SelectEach,
        SelectionMethod::Upload,
    ]
    .into_iter()
    .enumerate()
    {
        if index > 0 {
            spans.push(Span::styled(" │ ", theme.muted()));
        }
        let style = if method == active {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            theme.muted()
        };
        spans.push(Span::styled(method.label(), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_members(frame: &mut Frame, area: Rect, state: &State, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // method tabs
            Constraint::Length(3), // search or path input
            Constraint::Min(4),    // list
        ])
        .split(area);

    method_bar(frame, chunks[0], state.method, theme);

    if state.method == SelectionMethod::Upload {
        render_search(
            frame,
            chunks[1],
            "Roster CSV path (Enter to parse)",
            &state.path_input,
            state.focus == Focus::Search,
            theme,
        );
        let rows: Vec<ChecklistRow> = state
            .roster
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|entry| {
                ChecklistRow::new(
                    format!(
                        "{:<20} {:<28} {}",
                        entry.name,
                        entry.email,
                        entry.emp_id.as_deref().unwrap_or("-")
                    ),
                    true,
                )
            })
            .collect();
        let empty_message = state
            .roster_error
            .as_deref()
            .unwrap_or("Enter a roster path above and press Enter");
        render_checklist(
            frame,
            chunks[2],
            "Roster",
            &rows,
            &state.list,
            state.focus == Focus::List,
            theme,
            empty_message,
        );
        return;
    }

    render_search(
        frame,
        chunks[1],
        "Search Directory",
        &state.search,
        state.focus == Focus::Search,
        theme,
    );
    let rows: Vec<ChecklistRow> = state
        .filtered_candidates()
        .iter()
        .map(|user| {
            ChecklistRow::new(
                format!("{:<20} {:<28} {}", user.name, user.email, user.emp_id),
                state.members.contains(&user.id),
            )
        })
        .collect();
    let empty_message = if state.loading {
        "Loading directory users..."
    } else if state.method == SelectionMethod::Specific {
        "Type a search to find users"
    } else {
        "No Data"
    };
    render_checklist(
        frame,
        chunks[2],
        "Directory Users",
        &rows,
        &state.list,
        state.focus == Focus::List,
        theme,
        empty_message,
    );
}

fn render_review(frame: &mut Frame, area: Rect, state: &State, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let form = &state.details;
    let reviewer = if form.owner_is_reviewer { "yes" } else { "no" };
    let lines = vec![
        detail_line("Name", form.name.value().trim(), theme),
        detail_line("Description", form.description.value().trim(), theme),
        detail_line("Owner", form.owner.value().trim(), theme),
        detail_line("Tags", &form.parsed_tags().join(", "), theme),
        detail_line("Owner is reviewer", reviewer, theme),
        detail_line("Selection method", state.method.label(), theme),
    ];
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title("Group Details"),
    );
    frame.render_widget(paragraph, chunks[0]);

    let labels: Vec<String> = match state.method {
        SelectionMethod::Upload => state
            .roster
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|entry| entry.name.clone())
            .collect(),
        _ => state.members.iter().map(|user| user.name.clone()).collect(),
    };
    render_chips(frame, chunks[1], "Members", &labels, theme);
}

fn detail_line<'a>(label: &'a str, value: &str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:<20}"), theme.muted()),
        Span::raw(value.to_string()),
    ])
}
