//! Building blocks shared by both screens: title bar, avatar, profile text.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use contacts_engine::{Action, ContactProfile, Presence, Region};

use crate::theme::{Glyphs, Palette, SHAPES, styles};

/// Width of the clickable icon cell at the left of the title bar.
const TITLE_ICON_WIDTH: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleIcon {
    Home,
    Back,
}

/// Top bar with a navigation icon and a title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleBar {
    pub title: &'static str,
    pub icon: TitleIcon,
    /// Fired when the icon is clicked. The home icon does nothing.
    pub on_icon: Option<Action>,
}

impl TitleBar {
    /// Draws the bar and returns the icon's click region, if it has one.
    pub(crate) fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        palette: &Palette,
        glyphs: &Glyphs,
    ) -> Option<(Region, Action)> {
        let icon = match self.icon {
            TitleIcon::Home => glyphs.home,
            TitleIcon::Back => glyphs.back,
        };
        let line = Line::from(vec![
            Span::raw(format!(" {icon}  ")),
            Span::raw(self.title),
        ]);
        frame.render_widget(
            Paragraph::new(line).style(styles::title_bar(palette)),
            area,
        );

        let action = self.on_icon?;
        let icon_area = Rect {
            width: TITLE_ICON_WIDTH.min(area.width),
            ..area
        };
        Some((to_region(icon_area), action))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarSize {
    /// Inline in a list card.
    Thumbnail,
    /// Centered at the top of the detail screen.
    Portrait,
}

impl AvatarSize {
    pub(crate) const fn dimensions(self) -> (u16, u16) {
        match self {
            Self::Thumbnail => (4, 2),
            Self::Portrait => (16, 7),
        }
    }
}

/// Circular profile picture.
///
/// `source` is the contact's picture reference. Image loading is not
/// implemented: every avatar draws the same placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    pub size: AvatarSize,
    pub source: String,
}

impl Avatar {
    pub(crate) fn for_contact(contact: &ContactProfile, size: AvatarSize) -> Self {
        Self {
            size,
            source: contact.avatar_ref().to_string(),
        }
    }

    pub(crate) fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        palette: &Palette,
        glyphs: &Glyphs,
    ) {
        // Thumbnails are too short for a frame around the glyph.
        let inner = match self.size {
            AvatarSize::Thumbnail => area,
            AvatarSize::Portrait => {
                let block = Block::bordered()
                    .border_type(SHAPES.small)
                    .border_style(Style::default().fg(palette.avatar_border));
                let inner = block.inner(area);
                frame.render_widget(block, area);
                inner
            }
        };

        if inner.height > 0 {
            let mid = Rect {
                y: inner.y + (inner.height - 1) / 2,
                height: 1,
                ..inner
            };
            frame.render_widget(
                Paragraph::new(glyphs.avatar)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(palette.primary_variant)),
                mid,
            );
        }
    }
}

/// Name over presence, as shown in cards and on the detail screen.
pub(crate) fn profile_lines(
    name: &str,
    presence: Presence,
    palette: &Palette,
    glyphs: &Glyphs,
) -> [Line<'static>; 2] {
    let dot = if presence.is_active() {
        Span::styled(glyphs.online, Style::default().fg(palette.online))
    } else {
        Span::styled(glyphs.offline, styles::presence(palette, false))
    };
    [
        Line::from(Span::styled(name.to_string(), styles::contact_name(palette))),
        Line::from(vec![
            dot,
            Span::raw(" "),
            Span::styled(
                presence.label(),
                styles::presence(palette, presence.is_active()),
            ),
        ]),
    ]
}

/// One-line key hint footer: pairs of (key, description).
pub(crate) fn key_hints(
    hints: &[(&'static str, &'static str)],
    palette: &Palette,
) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", styles::key_hint(palette)));
        }
        spans.push(Span::styled(*key, styles::key_highlight(palette)));
        spans.push(Span::styled(format!(" {desc}"), styles::key_hint(palette)));
    }
    Line::from(spans)
}

pub(crate) fn to_region(area: Rect) -> Region {
    Region::new(area.x, area.y, area.width, area.height)
}
