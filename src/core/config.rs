//! Run-time configuration object + fluent builder.

use crate::core::{
    color::{AnsiCode, Color},
    error::ConfigError,
};

/// Immutable parameters handed to the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub bg: Option<Color>,
    pub fg: Option<Color>,
    pub show_sum: bool,
    pub show_stats: bool,
    pub reverse: bool,
    pub vertical: bool,
}

impl Config {
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Escape prefix for the glyph run, if any colour is set.
    #[inline]
    #[must_use]
    pub fn decoration(&self) -> Option<AnsiCode> {
        AnsiCode::sgr(self.bg, self.fg)
    }

    /// Whether a ` (...)` suffix follows the glyphs.
    #[inline]
    #[must_use]
    pub fn has_summary(&self) -> bool {
        self.show_sum || self.show_stats
    }
}

/// Fluent builder; colour names stay raw text until `build`.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    bg: Option<String>,
    fg: Option<String>,
    show_sum: bool,
    show_stats: bool,
    reverse: bool,
    vertical: bool,
}

impl ConfigBuilder {
    #[inline]
    #[must_use]
    pub fn bgcolor(mut self, c: impl Into<String>) -> Self {
        self.bg = Some(c.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn bgcolor_opt(mut self, c: Option<&str>) -> Self {
        if let Some(c) = c {
            self.bg = Some(c.to_owned());
        }
        self
    }
    #[inline]
    #[must_use]
    pub fn fgcolor(mut self, c: impl Into<String>) -> Self {
        self.fg = Some(c.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn fgcolor_opt(mut self, c: Option<&str>) -> Self {
        if let Some(c) = c {
            self.fg = Some(c.to_owned());
        }
        self
    }
    #[inline]
    #[must_use]
    pub fn sum(mut self, on: bool) -> Self {
        self.show_sum = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn stats(mut self, on: bool) -> Self {
        self.show_stats = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn reverse(mut self, on: bool) -> Self {
        self.reverse = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn vertical(mut self, on: bool) -> Self {
        self.vertical = on;
        self
    }

    /// Background is checked before foreground; an empty name means unset.
    pub fn build(self) -> Result<Config, ConfigError> {
        Ok(Config {
            bg: resolve(self.bg.as_deref())?,
            fg: resolve(self.fg.as_deref())?,
            show_sum: self.show_sum,
            show_stats: self.show_stats,
            reverse: self.reverse,
            vertical: self.vertical,
        })
    }
}

fn resolve(name: Option<&str>) -> Result<Option<Color>, ConfigError> {
    match name {
        None | Some("") => Ok(None),
        Some(n) => n.parse().map(Some),
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ConfigBuilder> for Result<Config, ConfigError> {
    fn from(b: ConfigBuilder) -> Self {
        b.build()
    }
}
