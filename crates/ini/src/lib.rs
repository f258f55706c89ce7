#![doc = include_str!("../README.md")]

pub mod error;
pub mod options;
pub mod parse;

mod convert;
mod document;
mod lookup;

pub use crate::document::{GLOBAL_SECTION_NAME, Ini};
pub use crate::error::{Error, Result, Warning};
pub use crate::options::Options;

use std::fs;
use std::io::Read;
use std::path::Path;

/// Diagnostic name given to documents parsed from a plain string.
const UNNAMED: &str = "ini";

/// Parses `source` as an INI document. Parsing itself cannot fail;
/// structural anomalies surface as [`Warning`]s on the returned document.
pub fn load_from_str(source: impl Into<String>, options: &Options) -> Ini {
    Ini::build(source.into(), UNNAMED.to_string(), options.clone())
}

/// Same as [`load_from_str`], with `name` used to label diagnostics.
pub fn load_from_named_str(source: impl Into<String>, name: &str, options: &Options) -> Ini {
    Ini::build(source.into(), name.to_string(), options.clone())
}

/// Reads and parses a file; the path becomes the document name.
pub fn load_from_file(path: impl AsRef<Path>, options: &Options) -> Result<Ini> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)?;
    Ok(Ini::build(
        source,
        path.display().to_string(),
        options.clone(),
    ))
}

/// Drains `reader` to the end and parses the result.
pub fn load_from_reader<R: Read>(mut reader: R, name: &str, options: &Options) -> Result<Ini> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    Ok(load_from_named_str(source, name, options))
}
