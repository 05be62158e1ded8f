//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    color::{AnsiCode, Color, colorize},
    config::{Config, ConfigBuilder},
    data::{parse_source, read_lines, validate_args},
    error::{ConfigError, InputError, RenderError, SparkError},
    stats::Stats,
};

pub use render::{Orientation, Palette, render};

/// Parse `values` (any mix of numbers and separators) and render them in
/// one go.
///
/// ```
/// use sparkline::{Config, sparkline};
///
/// let cfg = Config::builder().sum(true).build()?;
/// assert_eq!(sparkline(&["1 2 3", "4,5"], &cfg)?, "▁▂▄▆█ (sum:15)");
/// # Ok::<(), sparkline::SparkError>(())
/// ```
pub fn sparkline<S: AsRef<str>>(values: &[S], cfg: &Config) -> Result<String, SparkError> {
    let data = parse_source(values)?;
    Ok(render(&data, cfg)?)
}
