//! View state for rendering.
//!
//! This struct groups all state related to rendering and UI display,
//! separating it from navigation concerns.

use super::{Action, UiOptions};

/// Screen rectangle in terminal cells.
///
/// Mirrors the renderer's rect type so hit regions can be stored without a
/// ratatui dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    #[must_use]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn contains(self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && u32::from(column) < u32::from(self.x) + u32::from(self.width)
            && u32::from(row) < u32::from(self.y) + u32::from(self.height)
    }
}

/// Cursor and scroll position of the contact list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListViewState {
    /// Index of the highlighted card.
    pub selected: usize,
    /// Index of the first visible card.
    pub offset: usize,
    /// Cards that fit the viewport, written back by the renderer.
    pub visible: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailViewState {
    pub scroll: u16,
    /// Largest useful `scroll`, written back by the renderer.
    pub scroll_max: u16,
}

/// Separates view concerns from navigation state.
#[derive(Debug, Default)]
pub struct ViewState {
    pub list: ListViewState,
    pub detail: DetailViewState,
    pub ui_options: UiOptions,
    /// Clickable regions from the last frame with the action each one
    /// fires, in draw order.
    hit_regions: Vec<(Region, Action)>,
}

impl ViewState {
    #[must_use]
    pub fn new(ui_options: UiOptions) -> Self {
        Self {
            ui_options,
            ..Self::default()
        }
    }

    pub fn clear_hit_regions(&mut self) {
        self.hit_regions.clear();
    }

    pub fn push_hit_region(&mut self, region: Region, action: Action) {
        self.hit_regions.push((region, action));
    }

    #[must_use]
    pub fn hit_regions(&self) -> &[(Region, Action)] {
        &self.hit_regions
    }

    /// Action under the given cell. Later regions win when they overlap.
    #[must_use]
    pub fn action_at(&self, column: u16, row: u16) -> Option<Action> {
        self.hit_regions
            .iter()
            .rev()
            .find(|(region, _)| region.contains(column, row))
            .map(|(_, action)| *action)
    }
}
