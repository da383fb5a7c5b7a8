//! Create Group: the 3-step group creation wizard.
//!
//! Step 1 is a details form (name, description, owner, tags), step 2 picks
//! the members by one of three methods (directory search, select-each, or a
//! CSV roster upload), step 3 reviews and submits. Member candidates come
//! from the directory query boundary, loaded asynchronously on entry to
//! step 2 with the fixed fallback roster behind it.

pub mod msg;
pub mod state;
pub mod update;
pub mod view;

pub use msg::Msg;
pub use state::{DetailsField, Focus, SelectionMethod, State};
pub use update::{handle_key, update};
pub use view::view;
