//! Application state: dataset, navigation stack and view state.
//!
//! Every state change marks the app dirty; the event loop redraws only when
//! [`App::take_redraw`] reports it.

use std::mem;

use tracing::{debug, info};

use contacts_core::{Directory, NavEvent, NavigationState};
use contacts_types::ui::{Action, UiOptions, ViewState};
use contacts_types::{ContactId, ContactProfile, Route};

#[derive(Debug)]
pub struct App {
    directory: Directory,
    navigation: NavigationState,
    view: ViewState,
    should_quit: bool,
    needs_redraw: bool,
}

impl App {
    #[must_use]
    pub fn new(directory: Directory, ui_options: UiOptions) -> Self {
        info!(contacts = directory.len(), ?ui_options, "App initialized");
        Self {
            directory,
            navigation: NavigationState::new(),
            view: ViewState::new(ui_options),
            should_quit: false,
            needs_redraw: true,
        }
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn route(&self) -> Route {
        self.navigation.current()
    }

    pub fn ui_options(&self) -> UiOptions {
        self.view.ui_options
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Renderers write layout feedback (hit regions, scroll bounds) here.
    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Marks the screen stale, e.g. after a terminal resize.
    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Returns whether a redraw is pending and clears the flag.
    pub fn take_redraw(&mut self) -> bool {
        mem::take(&mut self.needs_redraw)
    }

    /// Index of the highlighted card, `None` for an empty list.
    pub fn selected_index(&self) -> Option<usize> {
        (!self.directory.is_empty())
            .then(|| self.view.list.selected.min(self.directory.len() - 1))
    }

    pub fn selected_contact(&self) -> Option<&ContactProfile> {
        self.selected_index().and_then(|index| self.directory.at(index))
    }

    /// Resolves a pointer click against the regions recorded by the last
    /// frame. Returns whether the click hit anything.
    pub fn click(&mut self, column: u16, row: u16) -> bool {
        let Some(action) = self.view.action_at(column, row) else {
            return false;
        };
        debug!(column, row, "Click");
        self.dispatch(action);
        true
    }

    pub fn dispatch(&mut self, action: Action) {
        debug!(?action, route = %self.route(), "Dispatch");
        match (self.route(), action) {
            (_, Action::Quit) => self.request_quit(),
            (_, Action::Back) => self.navigate_back(),
            (Route::List, Action::OpenContact(id)) => self.open_contact(id),
            (Route::List, Action::OpenSelected) => {
                if let Some(id) = self.selected_contact().map(ContactProfile::id) {
                    self.open_contact(id);
                }
            }
            (Route::List, Action::SelectNext) => self.move_selection(1),
            (Route::List, Action::SelectPrevious) => self.move_selection(-1),
            (Route::List, Action::SelectFirst) => self.select(0),
            (Route::List, Action::SelectLast) => self.select(usize::MAX),
            (Route::List, Action::PageDown) => self.move_selection(self.page_step()),
            (Route::List, Action::PageUp) => self.move_selection(-self.page_step()),
            (Route::Detail(_), Action::ScrollDown) => self.scroll_detail(1),
            (Route::Detail(_), Action::ScrollUp) => self.scroll_detail(-1),
            (Route::Detail(_), Action::PageDown) => self.scroll_detail(i32::from(DETAIL_PAGE)),
            (Route::Detail(_), Action::PageUp) => self.scroll_detail(-i32::from(DETAIL_PAGE)),
            (route, action) => debug!(%route, ?action, "Action ignored on this screen"),
        }
    }

    fn open_contact(&mut self, id: ContactId) {
        if let Some(index) = self.directory.position(id) {
            self.view.list.selected = index;
        }
        self.view.detail.scroll = 0;
        self.apply_nav(|nav| nav.navigate_to_detail(id));
    }

    fn navigate_back(&mut self) {
        self.apply_nav(NavigationState::navigate_back);
    }

    fn apply_nav(&mut self, op: impl FnOnce(&mut NavigationState) -> NavEvent) {
        let event = op(&mut self.navigation);
        if event.changed() {
            self.needs_redraw = true;
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let Some(current) = self.selected_index() else {
            return;
        };
        self.select(current.saturating_add_signed(delta));
    }

    /// Moves the cursor, clamping to the last card.
    fn select(&mut self, index: usize) {
        if self.directory.is_empty() {
            return;
        }
        let index = index.min(self.directory.len() - 1);
        if index != self.view.list.selected {
            self.view.list.selected = index;
            self.needs_redraw = true;
        }
    }

    fn page_step(&self) -> isize {
        isize::try_from(self.view.list.visible.max(1)).unwrap_or(1)
    }

    fn scroll_detail(&mut self, delta: i32) {
        let detail = &mut self.view.detail;
        let next = (i32::from(detail.scroll) + delta).clamp(0, i32::from(detail.scroll_max));
        let next = u16::try_from(next).unwrap_or(0);
        if next != detail.scroll {
            detail.scroll = next;
            self.needs_redraw = true;
        }
    }
}

const DETAIL_PAGE: u16 = 5;
