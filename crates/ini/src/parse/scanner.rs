//! Single forward pass that blanks comments and sizes allocations.

use crate::options::Options;
use crate::parse::find_byte;

/// Upper bounds for the section and key storage, gathered while stripping
/// comments. Duplicates and empty values can make the real counts smaller;
/// the structural pass shrinks its storage afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Estimates {
    pub sections: usize,
    pub keys: usize,
}

/// Blanks every comment span in `source` and counts section-open and
/// assignment characters outside comments.
///
/// A `;` always starts a comment, `#` unless disabled. By default a marker
/// counts anywhere on a line; under `disable_comment_anywhere` only at the
/// start of the buffer or directly after a newline. The span from the
/// marker up to (but excluding) the next newline is overwritten with
/// spaces, so byte offsets stay stable and the buffer stays valid UTF-8.
///
/// This phase cannot fail.
pub fn strip_comments(source: String, options: &Options) -> (String, Estimates) {
    let mut estimates = Estimates {
        sections: 1, // the global section always exists
        keys: 0,
    };

    let mut spans: Vec<(usize, usize)> = Vec::new();
    {
        let bytes = source.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i];
            if options.is_comment_char(b)
                && (options.comments_anywhere() || i == 0 || bytes[i - 1] == b'\n')
            {
                let end = find_byte(bytes, i, b'\n');
                spans.push((i, end));
                i = end;
                continue;
            }
            if b == b'[' {
                estimates.sections += 1;
            } else if options.is_assignment_char(b) {
                estimates.keys += 1;
            }
            i += 1;
        }
    }

    let mut data = source;
    for &(start, end) in &spans {
        data.replace_range(start..end, &" ".repeat(end - start));
    }

    (data, estimates)
}
