//! A collection of constants.

/// Block-height glyphs for horizontal sparklines, lowest to highest.
pub const HORIZONTAL_TICKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
/// Block-width glyphs for vertical sparklines, narrowest to widest.
pub const VERTICAL_TICKS: [char; 8] = ['▏', '▎', '▍', '▌', '▋', '▊', '▉', '█'];

/// When every sample is equal only the two middle glyphs are used.
pub const FLAT_TICKS_START: usize = 4;
/// Exclusive end of the flat sub-palette.
pub const FLAT_TICKS_END: usize = 6;

/// Token separators on top of any Unicode whitespace.
pub const SEPARATORS: [char; 3] = [',', '|', ';'];

/// SGR base for background colours (`40` = black).
pub const ANSI_BG_BASE: u8 = 40;
/// SGR base for foreground colours (`30` = black).
pub const ANSI_FG_BASE: u8 = 30;

/// 2^63 as a float: the first value that no longer fits in an `i64`.
pub const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;
/// -2^63, which is still representable.
pub const I64_LOWER_BOUND: f64 = -9_223_372_036_854_775_808.0;

/// Average is always printed with two decimals, `3` becomes `3.00`.
pub const AVG_PRECISION: usize = 2;
