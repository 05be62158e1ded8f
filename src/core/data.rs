//! Input normalisation: argument strings or piped lines to bounded `i64`s.
//!
//! ### Pipeline
//! 1. `select_source` picks arguments when there are any, piped lines
//!    otherwise.
//! 2. `tokenize` splits every string on runs of whitespace, `,`, `|` and `;`
//!    and flattens the result, keeping order.
//! 3. `parse_token` reads each token as an `f64`, rejects values an `i64`
//!    cannot hold, then truncates toward zero.
//!
//! The first bad token aborts the whole run.

use std::io::{BufRead, BufReader, Read};

use crate::core::{
    constants::{I64_LOWER_BOUND, I64_UPPER_BOUND, SEPARATORS},
    error::InputError,
};

// --- Helpers ---
#[inline]
#[must_use]
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || SEPARATORS.contains(&c)
}

/// Arguments win whenever there is at least one; piped lines are the
/// fallback. An empty slice means neither channel had anything.
#[inline]
#[must_use]
pub fn select_source<'a>(args: &'a [String], piped: Option<&'a [String]>) -> &'a [String] {
    if !args.is_empty() {
        return args;
    }
    piped.unwrap_or_default()
}

/// Flatten every input string into non-empty tokens, in order.
#[must_use]
pub fn tokenize<S: AsRef<str>>(source: &[S]) -> Vec<&str> {
    source
        .iter()
        .flat_map(|s| s.as_ref().split(is_separator))
        .filter(|t| !t.is_empty())
        .collect()
}

/// Parse one token. The whole token must be a float literal.
pub fn parse_token(token: &str) -> Result<i64, InputError> {
    let val = lexical_core::parse::<f64>(token.as_bytes())
        .map_err(|_| InputError::InvalidNumber(token.to_owned()))?;

    if val.is_infinite() {
        return Err(InputError::Infinite(token.to_owned()));
    }
    if val.is_nan() {
        return Err(InputError::NotANumber(token.to_owned()));
    }
    if val >= I64_UPPER_BOUND {
        return Err(InputError::TooLarge(token.to_owned()));
    }
    if val < I64_LOWER_BOUND {
        return Err(InputError::TooSmall(token.to_owned()));
    }

    #[allow(clippy::cast_possible_truncation)] // range checked above
    let n = val.trunc() as i64;
    Ok(n)
}

/// Tokenise + parse every string in `source`.
pub fn parse_source<S: AsRef<str>>(source: &[S]) -> Result<Vec<i64>, InputError> {
    let tokens = tokenize(source);
    if tokens.is_empty() {
        return Err(InputError::NoData);
    }

    let mut data = Vec::with_capacity(tokens.len());
    for t in tokens {
        data.push(parse_token(t)?);
    }
    log::debug!("parsed {} samples", data.len());
    Ok(data)
}

/// Source selection + parsing in one call.
pub fn validate_args(args: &[String], piped: Option<&[String]>) -> Result<Vec<i64>, InputError> {
    if args.is_empty() {
        log::debug!("no arguments, reading {} piped lines", piped.map_or(0, <[_]>::len));
    }
    parse_source(select_source(args, piped))
}

// --- Piped ingest ---
const BUF_CAP: usize = 1 << 16; // 64 KiB

/// Read `src` line by line, stripping `\n` / `\r\n`. Invalid UTF-8 is
/// replaced rather than rejected so the offending token can still be named.
pub fn read_lines<R: Read>(src: R) -> Result<Vec<String>, InputError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut lines = Vec::new();

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(InputError::Io)?;
        if n == 0 {
            break;
        }
        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }
        lines.push(String::from_utf8_lossy(&buf).into_owned());
    }
    Ok(lines)
}
