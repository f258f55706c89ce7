use std::sync::{Mutex, MutexGuard};

use crate::error::{Error, Result, Warning};
use crate::options::Options;
use crate::parse;

/// Name of the implicit section holding keys that appear before the first
/// `[header]`.
pub const GLOBAL_SECTION_NAME: &str = "global";

/// Byte range into the document buffer. Names and values are stored as
/// spans and resolved against the buffer on access; the buffer itself is
/// never mutated after the comment pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl Span {
    pub(crate) const EMPTY: Span = Span { start: 0, end: 0 };

    pub(crate) fn slice<'a>(&self, data: &'a str) -> &'a str {
        &data[self.start..self.end]
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Half-open interval of indices into the flat key arrays, covering one
/// contiguous run of keys from one textual occurrence of a section header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct KeyRange {
    pub(crate) start: usize,
    pub(crate) end: usize,
}

#[cfg(feature = "perf_smallvec")]
pub(crate) type Ranges = smallvec::SmallVec<[KeyRange; 2]>;
#[cfg(not(feature = "perf_smallvec"))]
pub(crate) type Ranges = Vec<KeyRange>;

/// A section accumulates one range per textual occurrence of its header;
/// reopening a name appends a range rather than creating a new section.
#[derive(Debug)]
pub(crate) struct Section {
    /// `None` is the reserved global section at index 0.
    pub(crate) name: Option<Span>,
    pub(crate) ranges: Ranges,
}

impl Section {
    pub(crate) fn global() -> Section {
        Section {
            name: None,
            ranges: one_range(0),
        }
    }

    pub(crate) fn named(name: Span, key_index: usize) -> Section {
        Section {
            name: Some(name),
            ranges: one_range(key_index),
        }
    }

    pub(crate) fn name<'a>(&self, data: &'a str) -> &'a str {
        match self.name {
            Some(span) => span.slice(data),
            None => GLOBAL_SECTION_NAME,
        }
    }
}

fn one_range(start: usize) -> Ranges {
    let mut ranges = Ranges::new();
    ranges.push(KeyRange { start, end: start });
    ranges
}

/// A parsed INI document.
///
/// Owns the comment-blanked text buffer plus the section/range/key model
/// built over it. Lookups borrow from the document; enumeration and CSV
/// results are owned and outlive it. Once built, a document is immutable
/// apart from the error slot, so lookups may run concurrently.
#[derive(Debug)]
pub struct Ini {
    pub(crate) name: String,
    pub(crate) data: String,
    pub(crate) options: Options,
    pub(crate) sections: Vec<Section>,
    pub(crate) key_names: Vec<Span>,
    pub(crate) key_values: Vec<Span>,
    pub(crate) warnings: Vec<Warning>,
    last_error: Mutex<Option<String>>,
}

impl Ini {
    pub(crate) fn build(source: String, name: String, options: Options) -> Ini {
        let (data, estimates) = parse::scanner::strip_comments(source, &options);
        let warnings = if options.warnings_enabled() {
            parse::validation::scan_warnings(&data, &options)
        } else {
            Vec::new()
        };
        let parsed = parse::parser::parse(&data, &options, &estimates);
        Ini {
            name,
            data,
            options,
            sections: parsed.sections,
            key_names: parsed.key_names,
            key_values: parsed.key_values,
            warnings,
            last_error: Mutex::new(None),
        }
    }

    /// Display name used in diagnostics: the file path, or `"ini"` for
    /// plain string input.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Warnings collected by the diagnostic pass, in detection order.
    /// Empty when warnings are disabled.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Number of keys stored across all sections after duplicate and
    /// empty-value resolution.
    pub fn key_count(&self) -> usize {
        self.key_names.len()
    }

    /// All section names in first-appearance order; index 0 is always the
    /// global section.
    pub fn section_names(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.name(&self.data)).collect()
    }

    /// Whether the most recent fallible operation failed. Always `false`
    /// when error tracking is disabled.
    pub fn has_error(&self) -> bool {
        self.slot().is_some()
    }

    /// Message of the most recent failure, if any.
    pub fn last_error(&self) -> Option<String> {
        self.slot().clone()
    }

    fn slot(&self) -> MutexGuard<'_, Option<String>> {
        self.last_error.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Every fallible operation clears the slot on entry; success paths
    /// leave it cleared.
    pub(crate) fn clear_error(&self) {
        if self.options.errors_enabled() {
            *self.slot() = None;
        }
    }

    /// Records the failure in the slot (unless tracking is disabled) and
    /// forwards it.
    pub(crate) fn report<T>(&self, result: Result<T>) -> Result<T> {
        if let Err(err) = &result {
            if self.options.errors_enabled() {
                *self.slot() = Some(err.to_string());
            }
        }
        result
    }

    pub(crate) fn not_found(&self, key: &str, section: Option<&str>) -> Error {
        match section {
            Some(section) => Error::KeyNotFoundInSection {
                key: key.to_string(),
                section: section.to_string(),
            },
            None => Error::KeyNotFound(key.to_string()),
        }
    }
}
