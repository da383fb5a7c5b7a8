//! Messages for the Access Request wizard.

use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone)]
pub enum Msg {
    // Navigation
    /// Proceed to the next step (no-op while the step is invalid).
    Next,
    /// Go back to the previous step.
    Previous,
    /// Submit the request from the final step.
    Submit,

    // Pickers
    /// Cycle the tab on the current step (user tabs / location tabs) or
    /// the pane on the access step.
    CycleTab,
    /// Move keyboard focus into the search box.
    FocusSearch,
    /// Move keyboard focus back to the list.
    FocusList,
    /// Editing key for the focused search box.
    SearchKey(KeyEvent),
    /// Navigation key for the focused list.
    ListNavigate(KeyCode),
    /// Toggle selection of the row under the cursor.
    ToggleCurrent,
    /// Open the highlighted user's profile (user search tab only).
    OpenProfile,
}
