//! Access Request screen.
//!
//! Three-step wizard for requesting application access:
//!
//! 1. Select User - pick users and/or user groups
//! 2. Select Location - pick stores, regions or custom store groups
//! 3. Select Access - pick applications, then entitlements within them
//!
//! Forward navigation is gated on each step having at least one
//! selection; submit clears every selection store and returns the wizard
//! to step one.

pub mod msg;
pub mod state;
pub mod update;
pub mod view;

pub use msg::Msg;
pub use state::{AccessPane, Focus, LocationTab, State, UserTab};
pub use update::{handle_key, update};
pub use view::view;
