//! Color palettes, shape presets and glyphs for the Contacts TUI.
//!
//! Two palettes (light and dark) share the same brand colors; the surface
//! and online colors are translucent in the original design and are stored
//! here pre-blended over each palette's background.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

use contacts_types::ui::{ThemeMode, UiOptions};

/// Brand color constants.
mod colors {
    use super::Color;

    pub const PRIMARY: Color = Color::Rgb(109, 107, 107); // #6D6B6B
    pub const PRIMARY_VARIANT: Color = Color::Rgb(83, 74, 104); // #534A68
    pub const SECONDARY: Color = Color::Rgb(82, 77, 88); // #524D58
    pub const TEAL: Color = Color::Rgb(3, 218, 197); // #03DAC5

    // === Light ===
    pub const LIGHT_BG: Color = Color::Rgb(255, 255, 255);
    pub const LIGHT_SURFACE: Color = Color::Rgb(242, 242, 242); // #DCDCDC @ 38%
    pub const LIGHT_SURFACE_SELECTED: Color = Color::Rgb(226, 224, 230);
    pub const LIGHT_TEXT: Color = Color::Rgb(28, 27, 31);
    pub const LIGHT_TEXT_MUTED: Color = Color::Rgb(110, 108, 114);
    pub const LIGHT_ONLINE: Color = Color::Rgb(132, 225, 132); // #32CD32 @ 60%
    pub const LIGHT_ONLINE_TEXT: Color = Color::Rgb(34, 139, 34);

    // === Dark ===
    pub const DARK_BG: Color = Color::Rgb(18, 18, 18);
    pub const DARK_SURFACE: Color = Color::Rgb(94, 94, 94); // #DCDCDC @ 38%
    pub const DARK_SURFACE_SELECTED: Color = Color::Rgb(83, 74, 104);
    pub const DARK_TEXT: Color = Color::Rgb(236, 236, 236);
    pub const DARK_TEXT_MUTED: Color = Color::Rgb(176, 174, 180);
    pub const DARK_ONLINE: Color = Color::Rgb(37, 130, 37); // #32CD32 @ 60%
    pub const DARK_ONLINE_TEXT: Color = Color::Rgb(110, 220, 110);

    pub const ON_PRIMARY: Color = Color::Rgb(255, 255, 255);
    pub const AVATAR_BORDER: Color = Color::Rgb(64, 64, 64); // DarkGray
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub surface_selected: Color,
    pub primary: Color,
    pub primary_variant: Color,
    pub secondary: Color,
    pub on_primary: Color,
    pub accent: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    pub avatar_border: Color,
    /// Presence dot for active contacts.
    pub online: Color,
    /// "Active now" text.
    pub online_text: Color,
}

impl Palette {
    #[must_use]
    pub fn light() -> Self {
        Self {
            background: colors::LIGHT_BG,
            surface: colors::LIGHT_SURFACE,
            surface_selected: colors::LIGHT_SURFACE_SELECTED,
            primary: colors::PRIMARY,
            primary_variant: colors::PRIMARY_VARIANT,
            secondary: colors::SECONDARY,
            on_primary: colors::ON_PRIMARY,
            accent: colors::PRIMARY_VARIANT,
            text_primary: colors::LIGHT_TEXT,
            text_muted: colors::LIGHT_TEXT_MUTED,
            avatar_border: colors::AVATAR_BORDER,
            online: colors::LIGHT_ONLINE,
            online_text: colors::LIGHT_ONLINE_TEXT,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: colors::DARK_BG,
            surface: colors::DARK_SURFACE,
            surface_selected: colors::DARK_SURFACE_SELECTED,
            primary: colors::PRIMARY,
            primary_variant: colors::PRIMARY_VARIANT,
            secondary: colors::SECONDARY,
            on_primary: colors::ON_PRIMARY,
            accent: colors::TEAL,
            text_primary: colors::DARK_TEXT,
            text_muted: colors::DARK_TEXT_MUTED,
            avatar_border: colors::AVATAR_BORDER,
            online: colors::DARK_ONLINE,
            online_text: colors::DARK_ONLINE_TEXT,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            background: Color::Black,
            surface: Color::Black,
            surface_selected: Color::DarkGray,
            primary: Color::White,
            primary_variant: Color::Gray,
            secondary: Color::Gray,
            on_primary: Color::Black,
            accent: Color::Yellow,
            text_primary: Color::White,
            text_muted: Color::Gray,
            avatar_border: Color::White,
            online: Color::Green,
            online_text: Color::Green,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        return Palette::high_contrast();
    }
    match options.theme {
        ThemeMode::Light => Palette::light(),
        ThemeMode::Dark => Palette::dark(),
    }
}

/// Corner presets by component size.
///
/// Small components are rounded; medium (cards) and large (panels) are square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shapes {
    pub small: BorderType,
    pub medium: BorderType,
    pub large: BorderType,
}

pub const SHAPES: Shapes = Shapes {
    small: BorderType::Rounded,
    medium: BorderType::Plain,
    large: BorderType::Plain,
};

/// ASCII/Unicode glyphs for icons.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub home: &'static str,
    pub back: &'static str,
    pub avatar: &'static str,
    pub online: &'static str,
    pub offline: &'static str,
    pub selected: &'static str,
    pub arrow_up: &'static str,
    pub arrow_down: &'static str,
    pub track: &'static str,
    pub thumb: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            home: "#",
            back: "<",
            avatar: "@",
            online: "*",
            offline: "o",
            selected: ">",
            arrow_up: "^",
            arrow_down: "v",
            track: "|",
            thumb: "#",
        }
    } else {
        Glyphs {
            home: "⌂",
            back: "←",
            avatar: "◉",
            online: "●",
            offline: "○",
            selected: "▸",
            arrow_up: "↑",
            arrow_down: "↓",
            track: "│",
            thumb: "█",
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn title_bar(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.on_primary)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn contact_name(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn presence(palette: &Palette, active: bool) -> Style {
        if active {
            Style::default().fg(palette.online_text)
        } else {
            Style::default().fg(palette.text_muted)
        }
    }

    #[must_use]
    pub fn card(palette: &Palette, selected: bool) -> Style {
        let bg = if selected {
            palette.surface_selected
        } else {
            palette.surface
        };
        Style::default().fg(palette.text_primary).bg(bg)
    }

    #[must_use]
    pub fn card_border(palette: &Palette, selected: bool) -> Style {
        if selected {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.secondary)
        }
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }
}
