use std::{
    io::{self, IsTerminal},
    time::Instant,
};

use crate::{
    core::{
        color::{AnsiCode, Color, colorize},
        config::Config,
        data::{read_lines, validate_args},
        error::{ConfigError, InputError, SparkError},
    },
    render::render,
};

use super::parse::Cli;

/// Colour names are validated here, before any input is touched.
pub fn config(a: &Cli) -> Result<Config, ConfigError> {
    Config::builder()
        .bgcolor_opt(a.bgcolor.as_deref())
        .fgcolor_opt(a.fgcolor.as_deref())
        .sum(a.sum)
        .stats(a.stats)
        .reverse(a.reverse)
        .vertical(a.vertical)
        .build()
}

/// Lines from stdin, or `None` when stdin is an interactive terminal.
pub fn piped_lines() -> Result<Option<Vec<String>>, InputError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        log::debug!("stdin is a terminal, not reading it");
        return Ok(None);
    }
    read_lines(stdin.lock()).map(Some)
}

pub fn spark(
    cfg: &Config,
    values: &[String],
    piped: Option<&[String]>,
) -> Result<String, SparkError> {
    let t_ingest = Instant::now();
    let data = validate_args(values, piped)?;
    let dur_ingest = t_ingest.elapsed().as_micros();

    let t_render = Instant::now();
    let line = render(&data, cfg)?;
    let dur_render = t_render.elapsed().as_micros();

    log::debug!(
        "ingest: {dur_ingest} µs ({} samples)   render: {dur_render} µs",
        data.len()
    );
    Ok(line)
}

/// Pretty-print available color names, each in its own colour.
#[must_use]
pub fn colors() -> String {
    let mut out = String::from("Possible colors:\n");
    for c in Color::ALL {
        out.push_str("  ");
        out.push_str(&colorize(&AnsiCode::fg(c), c.name()));
        out.push('\n');
    }
    out
}
