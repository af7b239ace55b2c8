//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod action;
mod options;
mod view_state;

pub use action::Action;
pub use options::{ThemeMode, ThemePreference, UiOptions};
pub use view_state::{DetailViewState, ListViewState, Region, ViewState};
