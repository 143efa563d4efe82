//! The [`Cell`] type, a single styled terminal character.

use crate::style::{Color, Style};

/// A styled character cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Cell {
    /// A blank cell painted with background `bg`.
    #[inline]
    pub const fn blank(bg: Color) -> Self {
        Self {
            ch: ' ',
            style: Style {
                fg: Color::DEFAULT,
                bg,
                attrs: crate::style::AttrMask::NONE,
            },
        }
    }

    /// Set the character (builder).
    #[inline]
    pub const fn with_char(mut self, ch: char) -> Self {
        self.ch = ch;
        self
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::default(),
        }
    }
}
