//! Terminal light/dark detection.
//!
//! Terminals that support it export `COLORFGBG` as `"<fg>;<bg>"` (sometimes
//! `"<fg>;<default>;<bg>"`), using ANSI color indices.

use std::env;

use contacts_types::ui::ThemeMode;

const COLORFGBG_VAR: &str = "COLORFGBG";

/// Theme advertised by the terminal, if any.
#[must_use]
pub fn detect_system_theme() -> Option<ThemeMode> {
    let raw = env::var(COLORFGBG_VAR).ok()?;
    let mode = theme_from_colorfgbg(&raw);
    tracing::debug!(value = %raw, ?mode, "Detected terminal background");
    mode
}

/// Maps a `COLORFGBG` value to a theme using the background index.
///
/// White (7) and the bright colors except bright black (8) read as light.
#[must_use]
pub fn theme_from_colorfgbg(value: &str) -> Option<ThemeMode> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    match bg {
        7 | 9..=15 => Some(ThemeMode::Light),
        0..=6 | 8 => Some(ThemeMode::Dark),
        _ => None,
    }
}
