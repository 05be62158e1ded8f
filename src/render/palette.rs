//! Glyph palettes and the min-max bucketing that picks one per sample.
//!
//! The mapping is linear over the observed range:
//!
//! `index = floor((n - min) * (len - 1) / range)`
//!
//! evaluated in `u128` so the product is exact for any pair of `i64`s and
//! integer division *is* the floor. `min` lands on glyph 0, `max` on the last.

use crate::core::{
    constants::{FLAT_TICKS_END, FLAT_TICKS_START, HORIZONTAL_TICKS, VERTICAL_TICKS},
    stats::Stats,
};

/// Block heights left-to-right, or block widths top-to-bottom.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    #[inline]
    #[must_use]
    pub const fn from_vertical(vertical: bool) -> Self {
        if vertical {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }

    #[inline]
    #[must_use]
    pub const fn ticks(self) -> &'static [char; 8] {
        match self {
            Self::Horizontal => &HORIZONTAL_TICKS,
            Self::Vertical => &VERTICAL_TICKS,
        }
    }

    /// Joined between adjacent glyphs.
    #[inline]
    #[must_use]
    pub const fn separator(self) -> &'static str {
        match self {
            Self::Horizontal => "",
            Self::Vertical => "\n",
        }
    }
}

/// The glyphs available for one render.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    glyphs: &'static [char],
}

impl Palette {
    /// Full 8-glyph set, or the two middle glyphs when there is no spread.
    #[must_use]
    pub fn select(orientation: Orientation, flat: bool) -> Self {
        let ticks = orientation.ticks();
        let glyphs: &'static [char] = if flat {
            &ticks[FLAT_TICKS_START..FLAT_TICKS_END]
        } else {
            ticks
        };
        Self { glyphs }
    }

    #[inline]
    #[must_use]
    pub fn glyphs(&self) -> &'static [char] {
        self.glyphs
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Bucket index for `n` given the sequence's extrema.
    #[must_use]
    pub fn index_of(&self, n: i64, stats: &Stats) -> usize {
        let range = stats.range();
        if range == 0 {
            return 0;
        }
        let last = self.len() - 1;
        let offset = u128::from(n.abs_diff(stats.min));
        let idx = offset * last as u128 / u128::from(range);
        // idx <= last whenever min <= n <= max
        usize::try_from(idx).map_or(last, |i| i.min(last))
    }

    #[inline]
    #[must_use]
    pub fn quantize(&self, n: i64, stats: &Stats) -> char {
        self.glyphs[self.index_of(n, stats)]
    }
}
