//! Terminal events routed through the input layer into the engine.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

use contacts_tui::handle_event;
use contacts_types::{ContactId, Route};

use crate::common::{HEIGHT, WIDTH, key, left_click, render, sample_app, wheel};

#[test]
fn keyboard_opens_the_selected_card() {
    let mut app = sample_app();
    handle_event(&mut app, &key(KeyCode::Down));
    handle_event(&mut app, &key(KeyCode::Enter));
    assert_eq!(app.route(), Route::Detail(ContactId::new(1)));
}

#[test]
fn key_release_is_ignored() {
    let mut app = sample_app();
    let release = KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release);
    handle_event(&mut app, &Event::Key(release));
    assert_eq!(app.route(), Route::List);
}

#[test]
fn clicking_a_card_opens_that_contact() {
    let mut app = sample_app();
    render(&mut app, WIDTH, HEIGHT).expect("list renders");

    // Second card occupies rows 5..9.
    handle_event(&mut app, &left_click(20, 6));
    assert_eq!(app.route(), Route::Detail(ContactId::new(1)));
}

#[test]
fn clicking_outside_any_card_does_nothing() {
    let mut app = sample_app();
    render(&mut app, WIDTH, HEIGHT).expect("list renders");
    app.take_redraw();

    handle_event(&mut app, &left_click(20, 15));
    assert_eq!(app.route(), Route::List);
    assert!(!app.take_redraw());
}

#[test]
fn clicking_the_back_arrow_returns_to_the_list() {
    let mut app = sample_app();
    handle_event(&mut app, &key(KeyCode::Enter));
    render(&mut app, WIDTH, HEIGHT).expect("detail renders");

    handle_event(&mut app, &left_click(1, 0));
    assert_eq!(app.route(), Route::List);
}

#[test]
fn back_keys_on_detail() {
    for code in [KeyCode::Esc, KeyCode::Backspace, KeyCode::Left, KeyCode::Char('h')] {
        let mut app = sample_app();
        handle_event(&mut app, &key(KeyCode::Enter));
        handle_event(&mut app, &key(code));
        assert_eq!(app.route(), Route::List, "{code:?} should go back");
    }
}

#[test]
fn escape_on_the_list_does_not_quit() {
    let mut app = sample_app();
    handle_event(&mut app, &key(KeyCode::Esc));
    assert_eq!(app.route(), Route::List);
    assert!(!app.should_quit());

    handle_event(&mut app, &key(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[test]
fn wheel_moves_the_list_cursor() {
    let mut app = sample_app();
    handle_event(&mut app, &wheel(MouseEventKind::ScrollDown));
    assert_eq!(app.selected_index(), Some(1));
    handle_event(&mut app, &wheel(MouseEventKind::ScrollUp));
    assert_eq!(app.selected_index(), Some(0));
}

#[test]
fn resize_requests_a_redraw() {
    let mut app = sample_app();
    app.take_redraw();
    handle_event(&mut app, &Event::Resize(100, 40));
    assert!(app.take_redraw());
}
