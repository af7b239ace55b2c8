//! Contact list screen: title bar over a scrolling column of profile cards.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    text::Line,
    widgets::{Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use contacts_engine::{Action, ContactId, ContactProfile, Presence, ViewState};
use contacts_types::ui::ListViewState;

use crate::format::truncate_to_width;
use crate::theme::{Glyphs, Palette, SHAPES, styles};
use crate::widgets::{
    Avatar, AvatarSize, TitleBar, TitleIcon, key_hints, profile_lines, to_region,
};

/// Rows per card: border, name, status, border.
pub const CARD_HEIGHT: u16 = 4;

pub const LIST_TITLE: &str = "Contacts";

const EMPTY_TEXT: &str = "No contacts";

const HINTS: &[(&str, &str)] = &[
    ("↑↓", "select"),
    ("Enter", "open"),
    ("q", "quit"),
];

/// A tappable summary of one contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCard {
    pub id: ContactId,
    pub name: String,
    pub presence: Presence,
    pub avatar: Avatar,
    /// Fired when the card is clicked or opened with the keyboard.
    pub on_select: Action,
}

impl ProfileCard {
    #[must_use]
    pub fn new(contact: &ContactProfile) -> Self {
        Self {
            id: contact.id(),
            name: contact.name().to_string(),
            presence: contact.presence(),
            avatar: Avatar::for_contact(contact, AvatarSize::Thumbnail),
            on_select: Action::OpenContact(contact.id()),
        }
    }

    #[must_use]
    pub fn status_text(&self) -> &'static str {
        self.presence.label()
    }

    fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        selected: bool,
        palette: &Palette,
        glyphs: &Glyphs,
    ) {
        let block = Block::bordered()
            .border_type(SHAPES.medium)
            .border_style(styles::card_border(palette, selected))
            .style(styles::card(palette, selected));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [marker_area, avatar_area, text_area] = Layout::horizontal([
            Constraint::Length(2),
            Constraint::Length(6),
            Constraint::Min(0),
        ])
        .areas(inner);

        if selected {
            frame.render_widget(
                Paragraph::new(glyphs.selected).style(styles::card_border(palette, true)),
                marker_area,
            );
        }

        let (avatar_width, avatar_height) = self.avatar.size.dimensions();
        self.avatar.render(
            frame,
            Rect {
                width: avatar_width.min(avatar_area.width),
                height: avatar_height.min(avatar_area.height),
                ..avatar_area
            },
            palette,
            glyphs,
        );

        let name = truncate_to_width(&self.name, usize::from(text_area.width));
        let lines = profile_lines(&name, self.presence, palette, glyphs);
        frame.render_widget(Paragraph::new(lines.to_vec()), text_area);
    }
}

/// The root screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListScreen {
    pub title_bar: TitleBar,
    pub cards: Vec<ProfileCard>,
}

impl ListScreen {
    /// One card per contact, in the order given.
    #[must_use]
    pub fn build(contacts: &[ContactProfile]) -> Self {
        Self {
            title_bar: TitleBar {
                title: LIST_TITLE,
                icon: TitleIcon::Home,
                on_icon: None,
            },
            cards: contacts.iter().map(ProfileCard::new).collect(),
        }
    }

    pub(crate) fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        view: &mut ViewState,
        palette: &Palette,
        glyphs: &Glyphs,
    ) {
        let [title_area, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        if let Some((region, action)) = self.title_bar.render(frame, title_area, palette, glyphs) {
            view.push_hit_region(region, action);
        }
        frame.render_widget(Paragraph::new(key_hints(HINTS, palette)), footer);

        let body = body.inner(Margin {
            horizontal: 1,
            vertical: 0,
        });

        if self.cards.is_empty() {
            view.list = ListViewState::default();
            frame.render_widget(
                Paragraph::new(Line::from(EMPTY_TEXT))
                    .style(styles::key_hint(palette))
                    .alignment(Alignment::Center),
                body,
            );
            return;
        }

        let len = self.cards.len();
        let visible = usize::from(body.height / CARD_HEIGHT).max(1);
        let selected = view.list.selected.min(len - 1);
        let offset = scroll_offset(view.list.offset, selected, visible, len);
        view.list = ListViewState {
            selected,
            offset,
            visible,
        };

        let needs_scrollbar = len > visible;
        let cards_area = if needs_scrollbar {
            Rect {
                width: body.width.saturating_sub(1),
                ..body
            }
        } else {
            body
        };

        let mut y = cards_area.y;
        for (index, card) in self.cards.iter().enumerate().skip(offset).take(visible) {
            let card_area = Rect {
                y,
                height: CARD_HEIGHT,
                ..cards_area
            }
            .intersection(cards_area);
            if card_area.is_empty() {
                break;
            }
            card.render(frame, card_area, index == selected, palette, glyphs);
            view.push_hit_region(to_region(card_area), card.on_select);
            y = y.saturating_add(CARD_HEIGHT);
        }

        if needs_scrollbar {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some(glyphs.arrow_up))
                .end_symbol(Some(glyphs.arrow_down))
                .track_symbol(Some(glyphs.track))
                .thumb_symbol(glyphs.thumb)
                .style(styles::key_hint(palette));
            // content_length = scrollable range, so the thumb reaches the
            // bottom exactly when the last card is in view
            let mut state = ScrollbarState::new(len - visible).position(offset);
            frame.render_stateful_widget(scrollbar, body, &mut state);
        }
    }
}

/// First visible card index that keeps `selected` on screen, moving as
/// little as possible from `current`.
pub(crate) fn scroll_offset(current: usize, selected: usize, visible: usize, len: usize) -> usize {
    let visible = visible.max(1);
    let max_offset = len.saturating_sub(visible);
    let offset = if selected < current {
        selected
    } else if selected >= current + visible {
        selected + 1 - visible
    } else {
        current
    };
    offset.min(max_offset)
}
