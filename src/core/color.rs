//! Eight-colour ANSI palette + zero-alloc escape wrapper.

use std::{fmt, str};

use crate::core::{
    constants::{ANSI_BG_BASE, ANSI_FG_BASE},
    error::ConfigError,
};

// --- Color ---
/// The colour names accepted by `--bgcolor` and `--fgcolor`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// Table order, which is also the SGR offset.
    pub const ALL: [Self; 8] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        }
    }

    /// Position in [`Color::ALL`], 0-7.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[inline]
    #[must_use]
    pub const fn bg_code(self) -> u8 {
        ANSI_BG_BASE + self.index()
    }

    #[inline]
    #[must_use]
    pub const fn fg_code(self) -> u8 {
        ANSI_FG_BASE + self.index()
    }

    /// Exact, case-sensitive lookup. `Red` and `red ` are both rejected.
    pub fn from_name(s: &str) -> Result<Self, ConfigError> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| ConfigError::InvalidColor(s.to_owned()))
    }
}

impl str::FromStr for Color {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

// --- AnsiCode ---
/// Longest prefix we build is `ESC[47;37m`.
const INLINE_CAP: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnsiCode {
    Static(&'static str),
    Inline { buf: [u8; INLINE_CAP], len: u8 },
}

impl AnsiCode {
    #[inline]
    #[must_use]
    pub const fn reset() -> Self {
        Self::Static("\x1b[0m")
    }

    /// `ESC[` + `4<bg>` + `;` + `3<fg>` + `m`, skipping whichever side is
    /// unset. `None` when neither colour is given.
    #[must_use]
    pub fn sgr(bg: Option<Color>, fg: Option<Color>) -> Option<Self> {
        if bg.is_none() && fg.is_none() {
            return None;
        }
        let mut buf = [0u8; INLINE_CAP];
        buf[..2].copy_from_slice(b"\x1b[");
        let mut len = 2;

        if let Some(c) = bg {
            len += write_code(&mut buf[len..], c.bg_code());
        }
        if let Some(c) = fg {
            if bg.is_some() {
                buf[len] = b';';
                len += 1;
            }
            len += write_code(&mut buf[len..], c.fg_code());
        }
        buf[len] = b'm';
        len += 1;

        #[allow(clippy::cast_possible_truncation)] // len <= INLINE_CAP
        let len = len as u8;
        Some(Self::Inline { buf, len })
    }

    /// Foreground-only escape, used by the colour listing.
    #[inline]
    #[must_use]
    pub fn fg(c: Color) -> Self {
        Self::sgr(None, Some(c)).unwrap_or_else(Self::reset)
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            // buffer only ever holds ASCII
            Self::Inline { buf, len } => str::from_utf8(&buf[..*len as usize]).unwrap_or_default(),
        }
    }
}

// --- Helpers ---
/// SGR codes are always two digits (30-37, 40-47).
#[inline]
fn write_code(dst: &mut [u8], n: u8) -> usize {
    dst[0] = b'0' + n / 10;
    dst[1] = b'0' + n % 10;
    2
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wrap `text` in colour + reset sequence.
#[inline]
#[must_use]
pub fn colorize(c: &AnsiCode, text: &str) -> String {
    format!("{c}{text}{}", AnsiCode::reset())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_name_round_trips_through_the_table() {
        for (i, c) in Color::ALL.into_iter().enumerate() {
            assert_eq!(Color::from_name(c.name()).unwrap(), c);
            assert_eq!(usize::from(c.index()), i);
        }
    }

    #[test]
    fn parses_through_from_str() {
        assert_eq!("magenta".parse::<Color>().unwrap(), Color::Magenta);
        assert_eq!(
            "Cyan".parse::<Color>().unwrap_err(),
            ConfigError::InvalidColor("Cyan".into())
        );
    }

    #[test]
    fn codes_follow_table_offset() {
        assert_eq!(Color::Black.bg_code(), 40);
        assert_eq!(Color::White.bg_code(), 47);
        assert_eq!(Color::Black.fg_code(), 30);
        assert_eq!(Color::Blue.fg_code(), 34);
    }

    #[test]
    fn lookup_is_case_sensitive_and_exact() {
        for bad in ["Red", "BLUE", "purple", "orange", "123", "light blue", "red!", " red"] {
            let err = Color::from_name(bad).unwrap_err();
            assert_eq!(err.to_string(), format!("invalid color: {bad}"));
        }
    }

    #[test]
    fn sgr_combines_background_then_foreground() {
        assert_eq!(AnsiCode::sgr(None, None), None);
        assert_eq!(
            AnsiCode::sgr(Some(Color::Blue), None).unwrap().as_str(),
            "\x1b[44m"
        );
        assert_eq!(
            AnsiCode::sgr(None, Some(Color::Red)).unwrap().as_str(),
            "\x1b[31m"
        );
        assert_eq!(
            AnsiCode::sgr(Some(Color::White), Some(Color::White))
                .unwrap()
                .as_str(),
            "\x1b[47;37m"
        );
    }

    #[test]
    fn colorize_appends_reset() {
        let code = AnsiCode::fg(Color::Green);
        assert_eq!(colorize(&code, "▁█"), "\x1b[32m▁█\x1b[0m");
    }
}
