//! Contact detail screen.

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Margin, Rect},
    text::Line,
    widgets::{Block, Paragraph, Wrap},
};

use contacts_engine::{
    Action, ContactId, ContactNotFound, ContactProfile, Directory, Presence, ViewState,
};

use crate::theme::{Glyphs, Palette, SHAPES, styles};
use crate::widgets::{Avatar, AvatarSize, TitleBar, TitleIcon, key_hints, profile_lines};

pub const DETAIL_TITLE: &str = "Contact Details";

const HINTS: &[(&str, &str)] = &[("Esc", "back"), ("↑↓", "scroll"), ("q", "quit")];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailScreen {
    pub title_bar: TitleBar,
    pub id: ContactId,
    pub avatar: Avatar,
    pub name: String,
    pub presence: Presence,
    pub description: String,
}

impl DetailScreen {
    /// Looks `id` up in `directory`.
    ///
    /// There is no fallback view: an unknown id fails the build and nothing
    /// is drawn.
    pub fn build(directory: &Directory, id: ContactId) -> Result<Self, ContactNotFound> {
        let contact = directory.get(id)?;
        Ok(Self::from_contact(contact))
    }

    #[must_use]
    pub fn from_contact(contact: &ContactProfile) -> Self {
        Self {
            title_bar: TitleBar {
                title: DETAIL_TITLE,
                icon: TitleIcon::Back,
                on_icon: Some(Action::Back),
            },
            id: contact.id(),
            avatar: Avatar::for_contact(contact, AvatarSize::Portrait),
            name: contact.name().to_string(),
            presence: contact.presence(),
            description: contact.description().to_string(),
        }
    }

    #[must_use]
    pub fn status_text(&self) -> &'static str {
        self.presence.label()
    }

    pub(crate) fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        view: &mut ViewState,
        palette: &Palette,
        glyphs: &Glyphs,
    ) {
        let (avatar_width, avatar_height) = self.avatar.size.dimensions();
        let [title_area, avatar_row, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(avatar_height + 2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        if let Some((region, action)) = self.title_bar.render(frame, title_area, palette, glyphs) {
            view.push_hit_region(region, action);
        }
        frame.render_widget(Paragraph::new(key_hints(HINTS, palette)), footer);

        let [avatar_area] = Layout::horizontal([Constraint::Length(avatar_width)])
            .flex(Flex::Center)
            .areas(avatar_row.inner(Margin {
                horizontal: 0,
                vertical: 1,
            }));
        self.avatar.render(frame, avatar_area, palette, glyphs);

        let panel = Block::bordered()
            .border_type(SHAPES.large)
            .border_style(styles::card_border(palette, false))
            .style(styles::card(palette, false));
        let inner = panel.inner(body).inner(Margin {
            horizontal: 1,
            vertical: 0,
        });
        frame.render_widget(panel, body);

        let [name, status] = profile_lines(&self.name, self.presence, palette, glyphs);
        let mut lines = vec![name, status, Line::from("")];
        lines.extend(
            self.description
                .lines()
                .map(|line| Line::styled(line.to_string(), styles::key_hint(palette))),
        );

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        let total = u16::try_from(paragraph.line_count(inner.width)).unwrap_or(u16::MAX);
        view.detail.scroll_max = total.saturating_sub(inner.height);
        view.detail.scroll = view.detail.scroll.min(view.detail.scroll_max);

        frame.render_widget(paragraph.scroll((view.detail.scroll, 0)), inner);
    }
}
