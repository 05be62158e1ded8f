use clap::Parser;

const LONG_ABOUT: &str = "\
Generate sparkline charts from numeric data provided as command line arguments or piped input.
Sparklines are small, word-sized graphics that show data trends without axes or coordinates.

Numbers can be separated by any space character, comma, pipe (|) or semicolon.
Negative numbers can be passed directly or after the flag separator '--'.

Sparklines can be colored (background and foreground) with a list of predefined color names:
black, red, green, yellow, blue, magenta, cyan and white.";

const EXAMPLES: &str = "\
Examples:
  spark 1 5 22 13 53               => ▁▁▃▂█
  spark 0,30,55,80,33,150 --sum    => ▁▂▃▄▂█ (sum:348)
  echo \"9 13 5 17 1\" | spark       => ▄▆▂█▁
  spark \"1|2|3|4|5\" --stats        => ▁▂▄▆█ (min:1 max:5 avg:3.00)
  spark --sum -- -5 -1 0 1 5       => ▁▃▄▅█ (sum:0)
  spark 1 2 3 --reverse            => █▄▁";

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "spark",
    version,
    about = "Generate sparkline charts from numbers",
    long_about = LONG_ABOUT,
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Numbers to plot; stdin is read when none are given
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Background color of the sparkline graph
    #[arg(short, long, value_name = "COLOR")]
    pub bgcolor: Option<String>,

    /// Foreground color of the sparkline graph
    #[arg(short, long, value_name = "COLOR")]
    pub fgcolor: Option<String>,

    /// Show sum of points
    #[arg(short, long)]
    pub sum: bool,

    /// Show stats (min, max and avg)
    #[arg(short = 't', long)]
    pub stats: bool,

    /// Draw the sparkline right-to-left
    #[arg(short, long)]
    pub reverse: bool,

    /// One glyph per line, bar width instead of height
    #[arg(short, long)]
    pub vertical: bool,

    /// List the available color names and exit
    #[arg(long)]
    pub help_colors: bool,

    /// Emit timing diagnostics on stderr
    #[arg(long)]
    pub debug: bool,
}
