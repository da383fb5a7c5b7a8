//! Pure portal logic, decoupled from the TUI and reusable across screens.

pub mod filter;
pub mod handoff;
pub mod request;
pub mod roster;
pub mod selection;
pub mod wizard;

pub use handoff::Handoff;
pub use request::{JsonFileSink, RequestDocument, RequestSink};
pub use selection::{Selectable, SelectionSet, SelectionStore};
pub use wizard::Wizard;
