//! Input handling for Contacts TUI.
//!
//! Terminal events are translated into [`Action`]s and dispatched to the
//! [`App`]. Key bindings depend on the current route; pointer clicks are
//! resolved against the regions recorded by the last frame.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tracing::trace;

use contacts_engine::{Action, App, Route};

/// Applies one terminal event to the app.
pub fn handle_event(app: &mut App, event: &Event) {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            if let Some(action) = action_for_key(app.route(), key) {
                app.dispatch(action);
            }
        }
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::Resize(width, height) => {
            trace!(width, height, "Resize");
            app.request_redraw();
        }
        _ => {}
    }
}

/// Key binding table.
#[must_use]
pub fn action_for_key(route: Route, key: &KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'q') => Some(Action::Quit),
            _ => None,
        };
    }

    let common = match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc | KeyCode::Backspace => Some(Action::Back),
        _ => None,
    };
    if common.is_some() {
        return common;
    }

    match route {
        Route::List => match key.code {
            KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrevious),
            KeyCode::Home | KeyCode::Char('g') => Some(Action::SelectFirst),
            KeyCode::End | KeyCode::Char('G') => Some(Action::SelectLast),
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l' | ' ') => {
                Some(Action::OpenSelected)
            }
            _ => None,
        },
        Route::Detail(_) => match key.code {
            KeyCode::Left | KeyCode::Char('h') => Some(Action::Back),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollDown),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollUp),
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),
            _ => None,
        },
    }
}

fn handle_mouse(app: &mut App, mouse: &MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.click(mouse.column, mouse.row);
        }
        MouseEventKind::ScrollDown => app.dispatch(match app.route() {
            Route::List => Action::SelectNext,
            Route::Detail(_) => Action::ScrollDown,
        }),
        MouseEventKind::ScrollUp => app.dispatch(match app.route() {
            Route::List => Action::SelectPrevious,
            Route::Detail(_) => Action::ScrollUp,
        }),
        _ => {}
    }
}
