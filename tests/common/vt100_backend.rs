//! Virtual terminal backend for rendering tests.
//!
//! Wraps a `vt100::Parser` so frames drawn by ratatui are interpreted as a
//! real terminal would, and the resulting screen text can be inspected.

use std::fmt::{self, Write as _};
use std::io;

use crossterm::style::{
    Attribute, Color as CColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{Clear, ClearType as CClearType};
use crossterm::{Command, cursor::MoveTo};
use ratatui::backend::{Backend, ClearType, WindowSize};
use ratatui::buffer::Cell;
use ratatui::layout::{Position, Size};
use ratatui::style::{Color, Style};

pub struct VT100Backend {
    parser: vt100::Parser,
    width: u16,
    height: u16,
}

impl VT100Backend {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            parser: vt100::Parser::new(height, width, 0),
            width,
            height,
        }
    }

    fn process(&mut self, command: impl Command) {
        let mut buf = String::new();
        let _ = command.write_ansi(&mut buf);
        self.parser.process(buf.as_bytes());
    }
}

/// Screen text, one line per row.
///
/// Every cell is drawn, so rows come back full width; trailing blanks are
/// trimmed to keep snapshots readable.
impl fmt::Display for VT100Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<String> = self
            .parser
            .screen()
            .rows(0, self.width)
            .map(|row| row.trim_end().to_string())
            .collect();
        f.write_str(&rows.join("\n"))
    }
}

impl Backend for VT100Backend {
    type Error = io::Error;

    fn draw<'a, I>(&mut self, content: I) -> io::Result<()>
    where
        I: Iterator<Item = (u16, u16, &'a Cell)>,
    {
        let mut buf = String::new();
        let mut last_pos: Option<(u16, u16)> = None;
        let mut last_style: Option<Style> = None;

        for (x, y, cell) in content {
            if last_pos != Some((x, y)) {
                let _ = MoveTo(x, y).write_ansi(&mut buf);
            }

            let cell_style = cell.style();
            if last_style != Some(cell_style) {
                let _ = SetAttribute(Attribute::Reset).write_ansi(&mut buf);
                if let Some(fg) = to_crossterm_color(cell_style.fg) {
                    let _ = SetForegroundColor(fg).write_ansi(&mut buf);
                }
                if let Some(bg) = to_crossterm_color(cell_style.bg) {
                    let _ = SetBackgroundColor(bg).write_ansi(&mut buf);
                }
                last_style = Some(cell_style);
            }

            let _ = write!(buf, "{}", cell.symbol());
            last_pos = Some((x + 1, y));
        }

        self.parser.process(buf.as_bytes());
        Ok(())
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn get_cursor_position(&mut self) -> io::Result<Position> {
        let (row, column) = self.parser.screen().cursor_position();
        Ok(Position::new(column, row))
    }

    fn set_cursor_position<P: Into<Position>>(&mut self, position: P) -> io::Result<()> {
        let pos = position.into();
        self.process(MoveTo(pos.x, pos.y));
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.process(Clear(CClearType::All));
        Ok(())
    }

    fn clear_region(&mut self, _clear_type: ClearType) -> io::Result<()> {
        self.clear()
    }

    fn size(&self) -> io::Result<Size> {
        Ok(Size::new(self.width, self.height))
    }

    fn window_size(&mut self) -> io::Result<WindowSize> {
        Ok(WindowSize {
            columns_rows: Size::new(self.width, self.height),
            pixels: Size::new(self.width * 8, self.height * 16),
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn to_crossterm_color(color: Option<Color>) -> Option<CColor> {
    match color? {
        Color::Reset => None,
        Color::Black => Some(CColor::Black),
        Color::Red => Some(CColor::DarkRed),
        Color::Green => Some(CColor::DarkGreen),
        Color::Yellow => Some(CColor::DarkYellow),
        Color::Blue => Some(CColor::DarkBlue),
        Color::Magenta => Some(CColor::DarkMagenta),
        Color::Cyan => Some(CColor::DarkCyan),
        Color::Gray => Some(CColor::Grey),
        Color::DarkGray => Some(CColor::DarkGrey),
        Color::LightRed => Some(CColor::Red),
        Color::LightGreen => Some(CColor::Green),
        Color::LightYellow => Some(CColor::Yellow),
        Color::LightBlue => Some(CColor::Blue),
        Color::LightMagenta => Some(CColor::Magenta),
        Color::LightCyan => Some(CColor::Cyan),
        Color::White => Some(CColor::White),
        Color::Rgb(r, g, b) => Some(CColor::Rgb { r, g, b }),
        Color::Indexed(i) => Some(CColor::AnsiValue(i)),
    }
}
