//! Screen view models and their renderers.
//!
//! Building a screen is pure: it maps the dataset and current route to a
//! tree of plain values (title bar, cards, avatar). Drawing then lays that
//! tree out into a frame and records where each clickable element landed.

mod detail;
mod list;

pub use detail::{DETAIL_TITLE, DetailScreen};
pub use list::{CARD_HEIGHT, LIST_TITLE, ListScreen, ProfileCard};

use ratatui::{Frame, style::Style, widgets::Block};

use contacts_engine::{App, ContactNotFound, Route};

use crate::theme::{glyphs, palette};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    List(ListScreen),
    Detail(DetailScreen),
}

impl Screen {
    /// View model for the app's current route.
    pub fn build(app: &App) -> Result<Self, ContactNotFound> {
        match app.route() {
            Route::List => Ok(Self::List(ListScreen::build(app.directory().contacts()))),
            Route::Detail(id) => DetailScreen::build(app.directory(), id).map(Self::Detail),
        }
    }
}

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App, screen: &Screen) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    let area = frame.area();

    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.background));
    frame.render_widget(bg_block, area);

    let view = app.view_mut();
    view.clear_hit_regions();
    match screen {
        Screen::List(list) => list.render(frame, area, view, &palette, &glyphs),
        Screen::Detail(detail) => detail.render(frame, area, view, &palette, &glyphs),
    }
}
