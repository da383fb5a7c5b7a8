//! Messages for the Create Group wizard.

use crossterm::event::{KeyCode, KeyEvent};

use crate::model::User;

#[derive(Debug, Clone)]
pub enum Msg {
    // Navigation
    /// Proceed to the next step (no-op while the step is invalid).
    Next,
    /// Go back to the previous step.
    Previous,
    /// Submit the group request from the review step.
    Submit,

    // Details form
    /// Move the form cursor to the next field.
    NextField,
    /// Editing key for the focused form field.
    FormKey(KeyEvent),
    /// Flip the owner-is-reviewer checkbox.
    ToggleReviewer,

    // Member picker
    /// Cycle the selection method (Specific / Select Each / Upload).
    CycleMethod,
    /// Move keyboard focus into the search or path input.
    FocusSearch,
    /// Move keyboard focus back to the list.
    FocusList,
    /// Editing key for the focused input.
    SearchKey(KeyEvent),
    /// Navigation key for the member list.
    ListNavigate(KeyCode),
    /// Toggle membership of the row under the cursor.
    ToggleCurrent,
    /// Parse the CSV roster at the entered path.
    LoadRoster,
    /// Directory fetch finished.
    MembersLoaded(Vec<User>),
}
