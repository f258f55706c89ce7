//! Structural pass: builds sections, ranges and the flat key arrays.

use crate::document::{KeyRange, Section, Span};
use crate::options::Options;
use crate::parse::find_byte;
use crate::parse::scanner::Estimates;

pub(crate) struct Parsed {
    pub(crate) sections: Vec<Section>,
    pub(crate) key_names: Vec<Span>,
    pub(crate) key_values: Vec<Span>,
}

/// One forward pass over the comment-blanked buffer.
///
/// Section headers are matched against every name seen so far: a known
/// name that is not the open section is reopened with a fresh key range, a
/// back-to-back repeat of the open section adds nothing, and an unknown
/// name becomes a new section. Key names run to the earliest assignment
/// character (which may cross newlines); duplicates are resolved against
/// the open section only. Parsing stops early when a header or the final
/// key line never terminates; both are warning-level conditions, not
/// errors.
pub(crate) fn parse(data: &str, options: &Options, estimates: &Estimates) -> Parsed {
    let bytes = data.as_bytes();

    let mut sections: Vec<Section> = Vec::with_capacity(estimates.sections);
    let mut key_names: Vec<Span> = Vec::with_capacity(estimates.keys);
    let mut key_values: Vec<Span> = Vec::with_capacity(estimates.keys);

    sections.push(Section::global());
    let mut open = 0;

    let mut i = 0;
    while i < bytes.len() {
        while i < bytes.len() && bytes[i] <= b' ' {
            i += 1;
        }
        if i >= bytes.len() {
            break;
        }

        if bytes[i] == b'[' {
            close_open_range(&mut sections[open], key_names.len());

            i += 1;
            let close = find_byte(bytes, i, b']');
            let name = trim(data, Span { start: i, end: close });

            match sections
                .iter()
                .position(|s| options.str_eq(s.name(data), name.slice(data)))
            {
                Some(index) => {
                    if index != open {
                        let start = key_names.len();
                        sections[index].ranges.push(KeyRange { start, end: start });
                    }
                    open = index;
                }
                None => {
                    sections.push(Section::named(name, key_names.len()));
                    open = sections.len() - 1;
                }
            }

            if close >= bytes.len() {
                // header never closed
                break;
            }
            i = close + 1;
        } else {
            let assignment = find_assignment(bytes, i, options);
            let name = trim(
                data,
                Span {
                    start: i,
                    end: assignment.unwrap_or(bytes.len()),
                },
            );
            let duplicate = find_duplicate(&sections[open], &key_names, data, name, options);

            let value = match assignment {
                Some(at) => {
                    i = at + 1;
                    let line_end = find_byte(bytes, i, b'\n');
                    let quote = find_byte(bytes, i, b'"');
                    if options.quotes_enabled() && quote < line_end {
                        let start = quote + 1;
                        let end = find_byte(bytes, start, b'"');
                        i = end + 1;
                        Span { start, end }
                    } else {
                        let span = trim(data, Span { start: i, end: line_end });
                        i = line_end + 1;
                        span
                    }
                }
                None => Span::EMPTY,
            };

            if !(value.is_empty() && options.ignore_empty_values) {
                match duplicate {
                    Some(index) => {
                        if options.override_duplicate_keys {
                            key_values[index] = value;
                        }
                    }
                    None => {
                        key_names.push(name);
                        key_values.push(value);
                    }
                }
            }

            if assignment.is_none() {
                break;
            }
        }
    }

    close_open_range(&mut sections[open], key_names.len());

    sections.shrink_to_fit();
    key_names.shrink_to_fit();
    key_values.shrink_to_fit();

    Parsed {
        sections,
        key_names,
        key_values,
    }
}

fn close_open_range(section: &mut Section, key_index: usize) {
    if let Some(last) = section.ranges.last_mut() {
        last.end = key_index;
    }
}

/// Earliest assignment character at or after `from`. A single scan gives
/// the "earliest occurrence wins" rule directly; `=` and `:` cannot share
/// a position, so there is no tie to break.
fn find_assignment(bytes: &[u8], from: usize, options: &Options) -> Option<usize> {
    let mut i = from;
    while i < bytes.len() {
        if options.is_assignment_char(bytes[i]) {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Index of an already-stored key with this name in the open section, or
/// `None`. The open range's upper bound is the current key index, not its
/// stored end, which is stale while the range accumulates.
fn find_duplicate(
    section: &Section,
    key_names: &[Span],
    data: &str,
    name: Span,
    options: &Options,
) -> Option<usize> {
    let last = section.ranges.len() - 1;
    for (r, range) in section.ranges.iter().enumerate() {
        let end = if r == last { key_names.len() } else { range.end };
        for index in range.start..end {
            if options.str_eq(key_names[index].slice(data), name.slice(data)) {
                return Some(index);
            }
        }
    }
    None
}

/// Shrinks a span past surrounding whitespace (any byte <= space). Stops
/// on byte boundaries that are always char boundaries, since every byte of
/// a multi-byte char is above the space range.
fn trim(data: &str, mut span: Span) -> Span {
    let bytes = data.as_bytes();
    while span.start < span.end && bytes[span.start] <= b' ' {
        span.start += 1;
    }
    while span.end > span.start && bytes[span.end - 1] <= b' ' {
        span.end -= 1;
    }
    span
}
