//! TUI rendering for Contacts using ratatui.

mod format;
mod input;
mod screens;
mod theme;
mod widgets;

pub use input::{action_for_key, handle_event};
pub use screens::{
    CARD_HEIGHT, DETAIL_TITLE, DetailScreen, LIST_TITLE, ListScreen, ProfileCard, Screen, draw,
};
pub use theme::{Glyphs, Palette, SHAPES, Shapes, glyphs, palette, styles};
pub use widgets::{Avatar, AvatarSize, TitleBar, TitleIcon};
