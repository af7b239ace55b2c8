//! Core engine for Contacts - application state and action dispatch.
//!
//! This crate contains the App state machine without TUI dependencies.

mod app;

pub use app::App;

// Re-export from crates for public API
pub use contacts_core::{ContactNotFound, Directory, DirectoryError, NavEvent, NavigationState};
pub use contacts_types::ui::{Action, Region, UiOptions, ViewState};
pub use contacts_types::{ContactId, ContactProfile, Presence, Route};
