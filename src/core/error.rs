//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

/// Precise configuration faults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidColor(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidColor(c) => write!(f, "invalid color: {c}"),
        }
    }
}
impl Error for ConfigError {}

/// Faults raised while turning raw text into samples.
///
/// Every token-level variant carries the token exactly as it was typed.
#[derive(Debug)]
pub enum InputError {
    Io(io::Error),
    NoData,
    InvalidNumber(String),
    Infinite(String),
    NotANumber(String),
    TooLarge(String),
    TooSmall(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Io(e) => write!(f, "failed to read stdin: {e}"),
            InputError::NoData => f.write_str(
                "no numeric data provided - specify numbers as arguments or pipe data via stdin",
            ),
            InputError::InvalidNumber(t) => write!(f, "invalid number: {t}"),
            InputError::Infinite(t) => write!(f, "infinite numbers not supported: {t}"),
            InputError::NotANumber(t) => write!(f, "NaN (not a number) not supported: {t}"),
            InputError::TooLarge(t) => write!(f, "number is too large: {t}"),
            InputError::TooSmall(t) => write!(f, "number is too small: {t}"),
        }
    }
}
impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            InputError::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// Arithmetic faults while summarising samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    SumOverflow,
    SumUnderflow,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::SumOverflow => f.write_str("numbers are too large, sum would overflow"),
            RenderError::SumUnderflow => {
                f.write_str("numbers are too small, sum would underflow")
            }
        }
    }
}
impl Error for RenderError {}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum SparkError {
    Io(io::Error),
    Config(ConfigError),
    Input(InputError),
    Render(RenderError),
}

impl fmt::Display for SparkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SparkError::Io(e) => write!(f, "{e}"),
            SparkError::Config(e) => write!(f, "{e}"),
            SparkError::Input(e) => write!(f, "{e}"),
            SparkError::Render(e) => write!(f, "{e}"),
        }
    }
}
impl Error for SparkError {}

// automatic conversions
impl From<io::Error> for SparkError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ConfigError> for SparkError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
impl From<InputError> for SparkError {
    fn from(e: InputError) -> Self {
        Self::Input(e)
    }
}
impl From<RenderError> for SparkError {
    fn from(e: RenderError) -> Self {
        Self::Render(e)
    }
}
