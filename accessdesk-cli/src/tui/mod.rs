//! Terminal portal: Elm-style screens on a small shared runtime.

pub mod apps;
pub mod command;
pub mod runtime;
pub mod session;
pub mod theme;
pub mod widgets;

pub use command::{Command, Screen};
pub use runtime::Runtime;
pub use session::Session;
pub use theme::Theme;
pub use widgets::{ListState, TextInputState};
