use core::fmt;
use std::io;

use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The byte source could not be obtained.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("section '{0}' not found")]
    SectionNotFound(String),

    #[error("key '{key}' not found in section '{section}'")]
    KeyNotFoundInSection { key: String, section: String },

    #[error("key '{0}' not found")]
    KeyNotFound(String),

    #[error("'{value}' is more than the maximum value of {target}")]
    TooLarge { value: String, target: &'static str },

    #[error("'{value}' is less than the minimum value of {target}")]
    TooSmall { value: String, target: &'static str },

    #[error("'{value}' could not be converted to {target}")]
    Unconvertible { value: String, target: &'static str },
}

/// A structurally suspicious but non-fatal pattern found while parsing.
///
/// Warnings never block parsing and never set the document error; they are
/// collected in detection order. `line` and `column` are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Warning {
    pub line: usize,
    pub column: usize,
    pub message: &'static str,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: warning: {}", self.line, self.column, self.message)
    }
}
