//! List/detail navigation driven through the engine.

use contacts_core::{ContactNotFound, NavigationState};
use contacts_engine::Action;
use contacts_tui::Screen;
use contacts_types::{ContactId, ContactProfile, Route};

use crate::common::{HEIGHT, WIDTH, builtin_app, render, row_of, sample_app};

#[test]
fn app_starts_on_the_list() {
    let app = sample_app();
    assert_eq!(app.route(), Route::List);
    assert_eq!(app.navigation(), &NavigationState::new());
    assert!(matches!(Screen::build(&app), Ok(Screen::List(_))));
}

#[test]
fn open_then_back_restores_initial_navigation() {
    let mut app = sample_app();
    let initial = app.navigation().clone();

    app.dispatch(Action::OpenContact(ContactId::new(1)));
    assert_eq!(app.route(), Route::Detail(ContactId::new(1)));
    assert_eq!(app.navigation().depth(), 2);

    app.dispatch(Action::Back);
    assert_eq!(app.navigation(), &initial);
}

#[test]
fn back_on_the_list_changes_nothing() {
    let mut app = sample_app();
    assert!(app.take_redraw());

    app.dispatch(Action::Back);

    assert_eq!(app.route(), Route::List);
    assert_eq!(app.navigation(), &NavigationState::new());
    assert!(!app.take_redraw());
    assert!(!app.should_quit());
}

#[test]
fn every_builtin_contact_opens_renders_and_returns() {
    let mut app = builtin_app();
    let initial = app.navigation().clone();

    for contact in app.directory().contacts().to_vec() {
        app.dispatch(Action::OpenContact(contact.id()));
        assert_eq!(app.route(), Route::Detail(contact.id()));

        let screen = render(&mut app, WIDTH, HEIGHT).expect("builtin contact renders");
        let lines: Vec<&str> = screen.lines().collect();
        let name_row = row_of(&screen, contact.name()).expect("name is on screen");
        assert!(
            lines[name_row + 1].contains(contact.presence().label()),
            "status line under {} should read {:?}",
            contact.name(),
            contact.presence().label()
        );

        app.dispatch(Action::Back);
        assert_eq!(app.navigation(), &initial);
        assert_eq!(app.route(), Route::List);
    }
}

#[test]
fn detail_screen_shows_the_opened_contact() {
    let mut app = sample_app();
    app.dispatch(Action::OpenContact(ContactId::new(1)));

    let Ok(Screen::Detail(detail)) = Screen::build(&app) else {
        panic!("expected the detail screen");
    };
    assert_eq!(detail.name, "Bob");
    assert_eq!(detail.status_text(), "Offline");
    assert_eq!(detail.id, ContactId::new(1));
}

#[test]
fn unknown_id_navigates_but_fails_to_build() {
    let mut app = sample_app();
    app.dispatch(Action::OpenContact(ContactId::new(42)));

    assert_eq!(app.route(), Route::Detail(ContactId::new(42)));
    assert_eq!(
        Screen::build(&app),
        Err(ContactNotFound {
            id: ContactId::new(42)
        })
    );
}

#[test]
fn returning_to_the_list_keeps_the_cursor_on_the_opened_card() {
    let mut app = builtin_app();
    app.dispatch(Action::SelectLast);
    app.dispatch(Action::OpenSelected);
    let last = app.directory().len() - 1;
    let last_id = app
        .directory()
        .at(last)
        .map(ContactProfile::id)
        .expect("builtin list is not empty");
    assert_eq!(app.route(), Route::Detail(last_id));

    app.dispatch(Action::Back);
    assert_eq!(app.route(), Route::List);
    assert_eq!(app.selected_index(), Some(last));
}

#[test]
fn list_only_actions_are_ignored_on_detail() {
    let mut app = sample_app();
    app.dispatch(Action::OpenContact(ContactId::new(0)));
    app.take_redraw();

    app.dispatch(Action::OpenContact(ContactId::new(1)));
    app.dispatch(Action::SelectNext);

    assert_eq!(app.route(), Route::Detail(ContactId::new(0)));
    assert_eq!(app.navigation().depth(), 2);
    assert!(!app.take_redraw());
}
