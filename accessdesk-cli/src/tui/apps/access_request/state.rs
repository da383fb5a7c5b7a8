//! State for the Access Request wizard.

use crate::model::{Application, CustomGroup, Entitlement, Region, StoreRecord, User, UserGroup};
use crate::services::filter;
use crate::services::wizard::Wizard;
use crate::tui::session::Session;
use crate::tui::widgets::{ListState, TextInputState};

/// Tabs on the Select User step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserTab {
    #[default]
    Search,
    Groups,
}

impl UserTab {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Search => "User Search",
            Self::Groups => "User Groups",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Search => Self::Groups,
            Self::Groups => Self::Search,
        }
    }
}

/// Tabs on the Select Location step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocationTab {
    #[default]
    Store,
    Region,
    CustomGroup,
}

impl LocationTab {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Store => "Store",
            Self::Region => "Region",
            Self::CustomGroup => "Custom Group",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Store => Self::Region,
            Self::Region => Self::CustomGroup,
            Self::CustomGroup => Self::Store,
        }
    }
}

/// Panes on the combined Select Access step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessPane {
    #[default]
    Applications,
    Entitlements,
}

/// Whether keys go to the search box or the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Search,
    #[default]
    List,
}

#[derive(Debug)]
pub struct State {
    pub wizard: Wizard,
    pub user_tab: UserTab,
    pub location_tab: LocationTab,
    pub access_pane: AccessPane,
    pub focus: Focus,
    /// Search box for the active picker on steps 1 and 2.
    pub search: TextInputState,
    pub app_search: TextInputState,
    pub ent_search: TextInputState,
    pub list: ListState,
    pub app_list: ListState,
    pub ent_list: ListState,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    pub fn new() -> Self {
        Self {
            wizard: Wizard::new(vec!["Select User", "Select Location", "Select Access"]),
            user_tab: UserTab::default(),
            location_tab: LocationTab::default(),
            access_pane: AccessPane::default(),
            focus: Focus::default(),
            search: TextInputState::new(),
            app_search: TextInputState::new(),
            ent_search: TextInputState::new(),
            list: ListState::with_cursor(),
            app_list: ListState::with_cursor(),
            ent_list: ListState::with_cursor(),
        }
    }

    /// Recompute per-step validity from the selection stores. Called
    /// before any navigation or render so the wizard never gates on
    /// stale flags.
    pub fn sync_validity(&mut self, session: &Session) {
        let selections = &session.selections;
        self.wizard.set_valid(
            0,
            !selections.users.is_empty() || !selections.groups.is_empty(),
        );
        self.wizard.set_valid(1, !selections.locations.is_empty());
        self.wizard.set_valid(2, !selections.entitlements.is_empty());
    }

    pub fn filtered_users<'a>(&self, session: &'a Session) -> Vec<&'a User> {
        filter::search_users(&session.catalog.users, self.search.value())
    }

    pub fn filtered_groups<'a>(&self, session: &'a Session) -> Vec<&'a UserGroup> {
        filter::search_user_groups(&session.catalog.user_groups, self.search.value())
    }

    pub fn filtered_stores<'a>(&self, session: &'a Session) -> Vec<&'a StoreRecord> {
        filter::search_stores(&session.catalog.stores, self.search.value())
    }

    pub fn filtered_regions<'a>(&self, session: &'a Session) -> Vec<&'a Region> {
        filter::search_regions(&session.catalog.regions, self.search.value())
    }

    pub fn filtered_custom_groups<'a>(&self, session: &'a Session) -> Vec<&'a CustomGroup> {
        filter::search_custom_groups(&session.catalog.custom_groups, self.search.value())
    }

    pub fn filtered_apps<'a>(&self, session: &'a Session) -> Vec<&'a Application> {
        filter::search_applications(&session.catalog.applications, self.app_search.value())
    }

    pub fn filtered_entitlements<'a>(&self, session: &'a Session) -> Vec<&'a Entitlement> {
        filter::entitlements_for_apps(
            &session.catalog.entitlements,
            session.selections.apps.items(),
            self.ent_search.value(),
        )
    }

    /// Item count of the list the cursor currently drives.
    pub fn active_list_len(&self, session: &Session) -> usize {
        match self.wizard.current() {
            0 => match self.user_tab {
                UserTab::Search => self.filtered_users(session).len(),
                UserTab::Groups => self.filtered_groups(session).len(),
            },
            1 => match self.location_tab {
                LocationTab::Store => self.filtered_stores(session).len(),
                LocationTab::Region => self.filtered_regions(session).len(),
                LocationTab::CustomGroup => self.filtered_custom_groups(session).len(),
            },
            _ => match self.access_pane {
                AccessPane::Applications => self.filtered_apps(session).len(),
                AccessPane::Entitlements => self.filtered_entitlements(session).len(),
            },
        }
    }

    /// Leaving a tab resets its search and cursor so the next tab starts
    /// clean, like the original pickers.
    pub fn reset_picker(&mut self) {
        self.search.clear();
        self.list = ListState::with_cursor();
        self.focus = Focus::List;
    }
}
