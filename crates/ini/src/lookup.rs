//! Lookup engine: section resolution, scoped and global key search, typed
//! conversions, CSV splitting and section enumeration.

use crate::convert;
use crate::document::{Ini, Section, Span};
use crate::error::{Error, Result};

impl Ini {
    /// Looks a key up across the whole document, ignoring section
    /// boundaries.
    ///
    /// With the default duplicate policy the first occurrence in file
    /// order wins; with `override_duplicate_keys` the scan continues to
    /// the last occurrence, mirroring last-write-wins across sections.
    pub fn get(&self, key: &str) -> Result<&str> {
        self.clear_error();
        self.report(self.find_global(key))
    }

    /// Looks a key up inside one section, walking its ranges in order and
    /// returning the first match. The global section is addressed as
    /// [`GLOBAL_SECTION_NAME`](crate::GLOBAL_SECTION_NAME).
    pub fn get_from(&self, section: &str, key: &str) -> Result<&str> {
        self.clear_error();
        self.report(self.find_scoped(section, key))
    }

    pub fn get_i64(&self, key: &str) -> Result<i64> {
        self.clear_error();
        self.report(self.find_global(key).and_then(convert::parse_i64))
    }

    pub fn get_i64_from(&self, section: &str, key: &str) -> Result<i64> {
        self.clear_error();
        self.report(self.find_scoped(section, key).and_then(convert::parse_i64))
    }

    pub fn get_u64(&self, key: &str) -> Result<u64> {
        self.clear_error();
        self.report(self.find_global(key).and_then(convert::parse_u64))
    }

    pub fn get_u64_from(&self, section: &str, key: &str) -> Result<u64> {
        self.clear_error();
        self.report(self.find_scoped(section, key).and_then(convert::parse_u64))
    }

    pub fn get_f64(&self, key: &str) -> Result<f64> {
        self.clear_error();
        self.report(self.find_global(key).and_then(convert::parse_f64))
    }

    pub fn get_f64_from(&self, section: &str, key: &str) -> Result<f64> {
        self.clear_error();
        self.report(self.find_scoped(section, key).and_then(convert::parse_f64))
    }

    pub fn get_bool(&self, key: &str) -> Result<bool> {
        self.clear_error();
        self.report(self.find_global(key).and_then(convert::parse_bool))
    }

    pub fn get_bool_from(&self, section: &str, key: &str) -> Result<bool> {
        self.clear_error();
        self.report(self.find_scoped(section, key).and_then(convert::parse_bool))
    }

    /// Splits a looked-up value on commas. Every field is trimmed and the
    /// result always holds at least one field, the whole trimmed value.
    /// The returned vector is owned and outlives the document.
    pub fn get_csv(&self, key: &str) -> Result<Vec<String>> {
        self.clear_error();
        self.report(self.find_global(key).map(split_csv))
    }

    pub fn get_csv_from(&self, section: &str, key: &str) -> Result<Vec<String>> {
        self.clear_error();
        self.report(self.find_scoped(section, key).map(split_csv))
    }

    /// All key names in a section, in range-then-index order.
    pub fn section_key_names(&self, section: &str) -> Result<Vec<String>> {
        self.clear_error();
        self.report(self.collect(section, |ini, index| {
            ini.key_names[index].slice(&ini.data).to_string()
        }))
    }

    /// All key values in a section, in range-then-index order.
    pub fn section_key_values(&self, section: &str) -> Result<Vec<String>> {
        self.clear_error();
        self.report(self.collect(section, |ini, index| {
            ini.key_values[index].slice(&ini.data).to_string()
        }))
    }

    /// All `(name, value)` pairs in a section, in range-then-index order.
    pub fn section_entries(&self, section: &str) -> Result<Vec<(String, String)>> {
        self.clear_error();
        self.report(self.collect(section, |ini, index| {
            (
                ini.key_names[index].slice(&ini.data).to_string(),
                ini.key_values[index].slice(&ini.data).to_string(),
            )
        }))
    }

    fn section(&self, name: &str) -> Result<&Section> {
        self.sections
            .iter()
            .find(|s| self.options.str_eq(s.name(&self.data), name))
            .ok_or_else(|| Error::SectionNotFound(name.to_string()))
    }

    fn find_scoped(&self, section_name: &str, key: &str) -> Result<&str> {
        let section = self.section(section_name)?;
        for range in &section.ranges {
            for index in range.start..range.end {
                if self.key_matches(index, key) {
                    return Ok(self.key_values[index].slice(&self.data));
                }
            }
        }
        Err(self.not_found(key, Some(section_name)))
    }

    fn find_global(&self, key: &str) -> Result<&str> {
        let mut last: Option<Span> = None;
        for index in 0..self.key_names.len() {
            if self.key_matches(index, key) {
                if self.options.override_duplicate_keys {
                    last = Some(self.key_values[index]);
                } else {
                    return Ok(self.key_values[index].slice(&self.data));
                }
            }
        }
        match last {
            Some(span) => Ok(span.slice(&self.data)),
            None => Err(self.not_found(key, None)),
        }
    }

    fn key_matches(&self, index: usize, key: &str) -> bool {
        self.options
            .str_eq(self.key_names[index].slice(&self.data), key)
    }

    fn collect<T>(&self, section_name: &str, item: impl Fn(&Ini, usize) -> T) -> Result<Vec<T>> {
        let section = self.section(section_name)?;
        let total = section.ranges.iter().map(|r| r.end - r.start).sum();
        let mut out = Vec::with_capacity(total);
        for range in &section.ranges {
            for index in range.start..range.end {
                out.push(item(self, index));
            }
        }
        Ok(out)
    }
}

fn split_csv(value: &str) -> Vec<String> {
    value.split(',').map(|field| field.trim().to_string()).collect()
}
