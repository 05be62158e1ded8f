mod handlers;
pub mod parse;

use std::io::{self, Write};

use clap::Parser;
pub use parse::Cli;

use crate::core::error::{InputError, SparkError};

/// Parse `std::env::args`, read stdin when needed, print the sparkline.
pub fn run() -> Result<(), SparkError> {
    let cli = parse::Cli::parse();
    init_logging(cli.debug);

    let out = execute(&cli, handlers::piped_lines)?;
    writeln!(io::stdout().lock(), "{out}")?;
    Ok(())
}

/// Everything after argument parsing. Returns the text to print, without
/// the trailing newline.
///
/// Colour names are validated before `read_piped` is called, and it is only
/// called when there are no positional values.
pub fn execute<F>(cli: &Cli, read_piped: F) -> Result<String, SparkError>
where
    F: FnOnce() -> Result<Option<Vec<String>>, InputError>,
{
    if cli.help_colors {
        return Ok(handlers::colors().trim_end().to_owned());
    }
    let cfg = handlers::config(cli)?;
    log::debug!("config: {cfg:?}");

    let piped = if cli.values.is_empty() {
        read_piped()?
    } else {
        None
    };
    handlers::spark(&cfg, &cli.values, piped.as_deref())
}

/// `warn` by default, `RUST_LOG` overrides, `--debug` forces `debug`.
fn init_logging(debug: bool) {
    let mut b =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        b.filter_level(log::LevelFilter::Debug);
    }
    // a second init (tests, embedding) is harmless
    let _ = b.format_timestamp_micros().try_init();
}
