//! Samples + `Config` to the final display string.
//!
//! ### Workflow
//! 1. `Stats::collect` for min / max / sum (the only fallible step).
//! 2. Pick the palette from orientation + spread, quantise every sample.
//! 3. Optionally reverse, then join with the orientation's separator.
//! 4. Wrap the whole run in one colour escape pair.
//! 5. Append ` (sum:… min:… max:… avg:…)` when asked.

use crate::{
    core::{
        color::colorize, config::Config, constants::AVG_PRECISION, error::RenderError,
        stats::Stats,
    },
    render::palette::{Orientation, Palette},
};

/// Render `samples` under `cfg`. Empty input renders as `""` whatever the
/// flags.
pub fn render(samples: &[i64], cfg: &Config) -> Result<String, RenderError> {
    let Some(stats) = Stats::collect(samples)? else {
        return Ok(String::new());
    };
    log::debug!(
        "stats: n={} min={} max={} sum={}",
        stats.count,
        stats.min,
        stats.max,
        stats.sum
    );

    let orientation = Orientation::from_vertical(cfg.vertical);
    let glyphs = quantize(samples, &stats, orientation, cfg.reverse);
    let run = join(&glyphs, orientation.separator());

    let mut out = match cfg.decoration() {
        Some(code) => colorize(&code, &run),
        None => run,
    };
    if let Some(s) = summary(&stats, cfg) {
        out.push(' ');
        out.push_str(&s);
    }
    Ok(out)
}

/// Glyph per sample in display order.
#[must_use]
pub fn quantize(
    samples: &[i64],
    stats: &Stats,
    orientation: Orientation,
    reverse: bool,
) -> Vec<char> {
    let palette = Palette::select(orientation, stats.is_flat());
    let mut glyphs: Vec<char> = samples.iter().map(|&n| palette.quantize(n, stats)).collect();
    if reverse {
        glyphs.reverse();
    }
    glyphs
}

fn join(glyphs: &[char], sep: &str) -> String {
    let mut s = String::with_capacity(glyphs.len() * (3 + sep.len()));
    for (i, g) in glyphs.iter().enumerate() {
        if i > 0 {
            s.push_str(sep);
        }
        s.push(*g);
    }
    s
}

/// `(sum:15 min:1 max:5 avg:3.00)`, fields in that fixed order.
#[must_use]
pub fn summary(stats: &Stats, cfg: &Config) -> Option<String> {
    if !cfg.has_summary() {
        return None;
    }
    let mut parts = Vec::with_capacity(4);
    if cfg.show_sum {
        parts.push(format!("sum:{}", stats.sum));
    }
    if cfg.show_stats {
        parts.push(format!("min:{}", stats.min));
        parts.push(format!("max:{}", stats.max));
        parts.push(format!("avg:{:.prec$}", stats.mean(), prec = AVG_PRECISION));
    }
    Some(format!("({})", parts.join(" ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::Color;

    fn plain() -> Config {
        Config::default()
    }

    fn spark(v: &[i64], cfg: &Config) -> String {
        render(v, cfg).unwrap()
    }

    #[test]
    fn horizontal_scenarios() {
        let cases: &[(&[i64], &str)] = &[
            (&[1, 5, 22, 13, 5], "▁▂█▅▂"),
            (&[0, 30, 55, 80, 33, 150], "▁▂▃▄▂█"),
            (&[5, 20], "▁█"),
            (&[1, 2, 3, 4, 100, 5, 10, 20, 50, 300], "▁▁▁▁▃▁▁▁▂█"),
            (&[1, 50, 100], "▁▄█"),
            (&[2, 4, 8], "▁▃█"),
            (&[1, 2, 3, 4, 5], "▁▂▄▆█"),
            (&[1, 1, 1, 1], "▅▅▅▅"),
            (&[9, 13, 5, 17, 1], "▄▆▂█▁"),
        ];
        for (v, want) in cases {
            assert_eq!(spark(v, &plain()), *want, "input {v:?}");
        }
    }

    #[test]
    fn empty_is_empty_for_every_flag_combination() {
        for bits in 0u8..64 {
            let cfg = Config {
                bg: (bits & 1 != 0).then_some(Color::Blue),
                fg: (bits & 2 != 0).then_some(Color::Red),
                show_sum: bits & 4 != 0,
                show_stats: bits & 8 != 0,
                reverse: bits & 16 != 0,
                vertical: bits & 32 != 0,
            };
            assert_eq!(spark(&[], &cfg), "");
        }
    }

    #[test]
    fn sum_suffix() {
        let cfg = Config::builder().sum(true).build().unwrap();
        assert_eq!(spark(&[1, 2, 3, 4, 5], &cfg), "▁▂▄▆█ (sum:15)");
        assert_eq!(spark(&[-5, -1, 0, 1, 5], &cfg), "▁▃▄▅█ (sum:0)");
        assert_eq!(spark(&[0, 30, 55, 80, 33, 150], &cfg), "▁▂▃▄▂█ (sum:348)");
    }

    #[test]
    fn stats_suffix_has_two_decimals() {
        let cfg = Config::builder().stats(true).build().unwrap();
        assert_eq!(spark(&[1, 2, 4], &cfg), "▁▃█ (min:1 max:4 avg:2.33)");
        assert_eq!(
            spark(&[1, 2, 3, 4, 5], &cfg),
            "▁▂▄▆█ (min:1 max:5 avg:3.00)"
        );
        assert_eq!(spark(&[-3, -4], &cfg), "█▁ (min:-4 max:-3 avg:-3.50)");
    }

    #[test]
    fn sum_comes_before_stats() {
        let cfg = Config::builder().sum(true).stats(true).build().unwrap();
        assert_eq!(
            spark(&[2, 2], &cfg),
            "▅▅ (sum:4 min:2 max:2 avg:2.00)"
        );
    }

    #[test]
    fn reverse_is_positional_only() {
        let fwd = Config::builder().stats(true).sum(true).build().unwrap();
        let rev = Config::builder()
            .stats(true)
            .sum(true)
            .reverse(true)
            .build()
            .unwrap();
        let v = [1, 5, 22, 13, 5, -8];

        let forward = spark(&v, &fwd);
        let reversed = spark(&v, &rev);
        let (f_run, f_suffix) = forward.split_once(' ').unwrap();
        let (r_run, r_suffix) = reversed.split_once(' ').unwrap();
        assert_eq!(r_run, f_run.chars().rev().collect::<String>());
        assert_eq!(r_suffix, f_suffix);

        let cfg = Config::builder().reverse(true).build().unwrap();
        assert_eq!(spark(&[1, 2, 3, 4, 5], &cfg), "█▆▄▂▁");
    }

    #[test]
    fn vertical_joins_with_newlines() {
        let cfg = Config::builder().vertical(true).build().unwrap();
        assert_eq!(spark(&[1, 2, 3, 4, 5], &cfg), "▏\n▎\n▌\n▊\n█");
        assert_eq!(spark(&[7, 7], &cfg), "▋\n▋");
        assert_eq!(spark(&[42], &cfg), "▋");
    }

    #[test]
    fn vertical_with_suffix_and_reverse() {
        let cfg = Config::builder()
            .vertical(true)
            .reverse(true)
            .sum(true)
            .build()
            .unwrap();
        assert_eq!(spark(&[1, 2, 3], &cfg), "█\n▌\n▏ (sum:6)");
    }

    #[test]
    fn colour_wraps_whole_run_once() {
        let v = [1, 2, 3, 4, 5];
        let bg = Config::builder().bgcolor("blue").build().unwrap();
        let fg = Config::builder().fgcolor("red").build().unwrap();
        let both = Config::builder()
            .bgcolor("blue")
            .fgcolor("red")
            .build()
            .unwrap();
        assert_eq!(spark(&v, &bg), "\x1b[44m▁▂▄▆█\x1b[0m");
        assert_eq!(spark(&v, &fg), "\x1b[31m▁▂▄▆█\x1b[0m");
        assert_eq!(spark(&v, &both), "\x1b[44;31m▁▂▄▆█\x1b[0m");
    }

    #[test]
    fn suffix_sits_outside_the_colour() {
        let cfg = Config::builder()
            .fgcolor("green")
            .vertical(true)
            .sum(true)
            .build()
            .unwrap();
        assert_eq!(spark(&[1, 2], &cfg), "\x1b[32m▏\n█\x1b[0m (sum:3)");
    }

    #[test]
    fn overflow_produces_no_output() {
        let cfg = Config::builder().sum(true).build().unwrap();
        let err = render(&[i64::MAX, 1], &cfg).unwrap_err();
        assert_eq!(err, RenderError::SumOverflow);
        assert_eq!(err.to_string(), "numbers are too large, sum would overflow");
        // overflow is fatal even when the sum is never shown
        assert!(render(&[i64::MAX, i64::MAX], &plain()).is_err());
    }

    #[test]
    fn flat_run_repeats_one_glyph() {
        for n in [-1_000_000, -1, 0, 12, 1 << 40] {
            assert_eq!(spark(&[n; 6], &plain()), "▅".repeat(6));
        }
    }
}
