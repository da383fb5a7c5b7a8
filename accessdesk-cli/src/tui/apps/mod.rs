//! The portal screens.
//!
//! Each screen follows the same shape: a `State` struct, a `Msg` enum, a
//! `handle_key` that maps raw key events to messages, an `update` that
//! applies a message and returns a [`Command`](crate::tui::command::Command),
//! and a ratatui `view`.

pub mod access_request;
pub mod common;
pub mod group_create;
pub mod home;
pub mod profile;
pub mod roles;
pub mod stores;
