//! Visual styling: [`Color`], [`AttrMask`] and [`Style`].

use std::ops::BitOr;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An RGB colour, or the terminal's default colour.
///
/// Packed as `0x01RRGGBB`; the high flag keeps pure black distinct from
/// [`Color::DEFAULT`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color(u32);

const SET: u32 = 1 << 24;

impl Color {
    /// The default / unset colour.
    pub const DEFAULT: Self = Self(0);

    pub const WHITE: Self = Self::from_rgb(255, 255, 255);
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    pub const RED: Self = Self::from_rgb(255, 0, 0);
    pub const GREEN: Self = Self::from_rgb(0, 255, 0);
    pub const BLUE: Self = Self::from_rgb(0, 0, 255);

    /// Construct from individual RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(SET | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// RGB components, or `None` for [`Color::DEFAULT`].
    #[inline]
    pub const fn rgb(self) -> Option<(u8, u8, u8)> {
        if self.0 & SET == 0 {
            return None;
        }
        Some((
            ((self.0 >> 16) & 0xFF) as u8,
            ((self.0 >> 8) & 0xFF) as u8,
            (self.0 & 0xFF) as u8,
        ))
    }

    /// Linear blend towards `other`; `t` is clamped to `[0, 1]`.
    ///
    /// Blending with the default colour returns `self` unchanged.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let (Some((r0, g0, b0)), Some((r1, g1, b1))) = (self.rgb(), other.rgb()) else {
            return self;
        };
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color::from_rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
    }
}

// ---------------------------------------------------------------------------
// AttrMask
// ---------------------------------------------------------------------------

/// Bitmask of text attributes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct AttrMask(pub u8);

impl AttrMask {
    pub const NONE: Self = Self(0);
    pub const BOLD: Self = Self(1 << 0);
    pub const REVERSE: Self = Self(1 << 1);
    pub const DIM: Self = Self(1 << 2);

    /// Whether this mask contains all the bits from `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Whether the mask is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for AttrMask {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

/// Complete visual style for a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub attrs: AttrMask,
}

impl Style {
    /// Set the foreground colour (builder).
    #[inline]
    pub const fn with_fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background colour (builder).
    #[inline]
    pub const fn with_bg(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }

    /// Set the attribute mask (builder).
    #[inline]
    pub const fn with_attrs(mut self, attrs: AttrMask) -> Self {
        self.attrs = attrs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_is_not_default() {
        assert_ne!(Color::BLACK, Color::DEFAULT);
        assert_eq!(Color::BLACK.rgb(), Some((0, 0, 0)));
        assert_eq!(Color::DEFAULT.rgb(), None);
    }

    #[test]
    fn color_components() {
        let c = Color::from_rgb(0xAB, 0xCD, 0xEF);
        assert_eq!(c.rgb(), Some((0xAB, 0xCD, 0xEF)));
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 0.0), Color::BLACK);
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 1.0), Color::WHITE);
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 7.0), Color::WHITE);
        assert_eq!(
            Color::BLACK.lerp(Color::from_rgb(200, 100, 50), 0.5),
            Color::from_rgb(100, 50, 25)
        );
        assert_eq!(Color::DEFAULT.lerp(Color::WHITE, 0.5), Color::DEFAULT);
    }

    #[test]
    fn attr_mask_ops() {
        let m = AttrMask::BOLD | AttrMask::DIM;
        assert!(m.contains(AttrMask::BOLD));
        assert!(m.contains(AttrMask::DIM));
        assert!(!m.contains(AttrMask::REVERSE));
        assert!(AttrMask::NONE.is_empty());
    }

    #[test]
    fn style_builder() {
        let s = Style::default()
            .with_fg(Color::RED)
            .with_bg(Color::BLACK)
            .with_attrs(AttrMask::BOLD);
        assert_eq!(s.fg.rgb(), Some((255, 0, 0)));
        assert!(s.attrs.contains(AttrMask::BOLD));
    }
}
