//! State for the Create Group wizard.

use crate::model::User;
use crate::services::filter;
use crate::services::roster::RosterEntry;
use crate::services::selection::SelectionStore;
use crate::services::wizard::Wizard;
use crate::tui::widgets::{ListState, TextInputState};

/// Fields on the Group Details form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailsField {
    #[default]
    Name,
    Description,
    Owner,
    Tags,
    Reviewer,
}

impl DetailsField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Group Name",
            Self::Description => "Description",
            Self::Owner => "Owner",
            Self::Tags => "Tags (comma separated)",
            Self::Reviewer => "Owner is reviewer",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Name => Self::Description,
            Self::Description => Self::Owner,
            Self::Owner => Self::Tags,
            Self::Tags => Self::Reviewer,
            Self::Reviewer => Self::Name,
        }
    }
}

/// How members are picked on the Select Users step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMethod {
    /// Search the directory, then tick results. Search-gated: the list
    /// stays empty until a query is typed.
    #[default]
    Specific,
    /// Browse the whole candidate roster and tick members one by one.
    SelectEach,
    /// Upload a CSV roster instead of picking individual users.
    Upload,
}

impl SelectionMethod {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Specific => "Specific Users",
            Self::SelectEach => "Select Each",
            Self::Upload => "Upload Roster",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Specific => Self::SelectEach,
            Self::SelectEach => Self::Upload,
            Self::Upload => Self::Specific,
        }
    }
}

/// Whether keys go to the search/path input or the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Search,
    #[default]
    List,
}

/// The details form. Tags are entered comma-separated and split on
/// submit.
#[derive(Debug, Default)]
pub struct DetailsForm {
    pub name: TextInputState,
    pub description: TextInputState,
    pub owner: TextInputState,
    pub tags: TextInputState,
    pub owner_is_reviewer: bool,
    pub field: DetailsField,
}

impl DetailsForm {
    pub fn active_input(&mut self) -> Option<&mut TextInputState> {
        match self.field {
            DetailsField::Name => Some(&mut self.name),
            DetailsField::Description => Some(&mut self.description),
            DetailsField::Owner => Some(&mut self.owner),
            DetailsField::Tags => Some(&mut self.tags),
            DetailsField::Reviewer => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.name.is_blank() && !self.description.is_blank() && !self.owner.is_blank()
    }

    pub fn parsed_tags(&self) -> Vec<String> {
        self.tags
            .value()
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug)]
pub struct State {
    pub wizard: Wizard,
    pub details: DetailsForm,
    pub method: SelectionMethod,
    pub focus: Focus,
    /// Directory search query for the Specific method; the Upload
    /// method uses `path_input` instead.
    pub search: TextInputState,
    pub path_input: TextInputState,
    pub list: ListState,
    /// Candidate users fetched from the directory on entry to step 2.
    pub candidates: Vec<User>,
    pub loading: bool,
    /// Members picked so far. Local to this flow, unlike the shared
    /// access-request stores.
    pub members: SelectionStore<User>,
    pub roster: Option<Vec<RosterEntry>>,
    pub roster_error: Option<String>,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    pub fn new() -> Self {
        Self {
            wizard: Wizard::new(vec!["Group Details", "Select Users", "Review & Submit"]),
            details: DetailsForm::default(),
            method: SelectionMethod::default(),
            focus: Focus::default(),
            search: TextInputState::new(),
            path_input: TextInputState::new(),
            list: ListState::with_cursor(),
            candidates: Vec::new(),
            loading: false,
            members: SelectionStore::new(),
            roster: None,
            roster_error: None,
        }
    }

    /// Recompute per-step validity. The details step needs the form
    /// complete; the member step depends on the selection method; the
    /// review step is always valid once reached.
    pub fn sync_validity(&mut self) {
        self.wizard.set_valid(0, self.details.is_complete());
        let members_ok = match self.method {
            SelectionMethod::Specific | SelectionMethod::SelectEach => !self.members.is_empty(),
            SelectionMethod::Upload => self.roster.is_some(),
        };
        self.wizard.set_valid(1, members_ok);
        self.wizard.set_valid(2, true);
    }

    /// Candidates visible in the member picker for the current method.
    pub fn filtered_candidates(&self) -> Vec<&User> {
        match self.method {
            SelectionMethod::Specific => {
                filter::search_directory_users(&self.candidates, self.search.value())
            }
            SelectionMethod::SelectEach => self.candidates.iter().collect(),
            SelectionMethod::Upload => Vec::new(),
        }
    }

    pub fn member_count(&self) -> usize {
        match self.method {
            SelectionMethod::Upload => self.roster.as_ref().map_or(0, Vec::len),
            _ => self.members.len(),
        }
    }

    pub fn reset_picker(&mut self) {
        self.search.clear();
        self.list = ListState::with_cursor();
        self.focus = Focus::List;
    }
}
