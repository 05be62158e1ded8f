//! Aggregates the “business logic” layer.

pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod stats;

// re-export frequently-used items for convenience
pub use color::{AnsiCode, Color, colorize};
pub use config::{Config, ConfigBuilder};
pub use constants::{HORIZONTAL_TICKS, SEPARATORS, VERTICAL_TICKS};
pub use data::{parse_source, read_lines, validate_args};
pub use error::{ConfigError, InputError, RenderError, SparkError};
pub use stats::Stats;
