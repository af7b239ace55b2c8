//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

pub mod vt100_backend;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::Terminal;

use contacts_core::{ContactNotFound, Directory};
use contacts_engine::App;
use contacts_tui::{Screen, draw};
use contacts_types::ui::UiOptions;
use contacts_types::{ContactId, ContactProfile};

use vt100_backend::VT100Backend;

pub const WIDTH: u16 = 60;
pub const HEIGHT: u16 = 24;

/// The two-record dataset: Alice (online) then Bob (offline).
pub fn alice_and_bob() -> Directory {
    Directory::new(vec![
        ContactProfile::new(ContactId::new(0), "Alice", "Keeps bees on the roof.", true),
        ContactProfile::new(ContactId::new(1), "Bob", "Repairs vintage bicycles.", false),
    ])
    .expect("fixture ids are unique")
}

pub fn sample_app() -> App {
    App::new(alice_and_bob(), UiOptions::default())
}

pub fn builtin_app() -> App {
    App::new(
        Directory::builtin().expect("builtin dataset is valid"),
        UiOptions::default(),
    )
}

/// Builds and draws the current route, as the event loop does, and
/// returns the screen text.
pub fn render(app: &mut App, width: u16, height: u16) -> Result<String, ContactNotFound> {
    let screen = Screen::build(app)?;
    let mut terminal =
        Terminal::new(VT100Backend::new(width, height)).expect("failed to create terminal");
    terminal
        .draw(|frame| draw(frame, app, &screen))
        .expect("failed to draw");
    Ok(terminal.backend().to_string())
}

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn left_click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

pub fn wheel(kind: MouseEventKind) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    })
}

/// Screen row holding `needle`, if it is on screen.
pub fn row_of(screen: &str, needle: &str) -> Option<usize> {
    screen.lines().position(|line| line.contains(needle))
}
