//! Indent-skipping copy.
//!
//! Builds the unindented text line by line. Each line first has `indent`
//! columns of leading space consumed, then the rest of the line (terminators
//! included) is copied verbatim.
//!
//! # Tabs Across The Indent
//!
//! A tab may start inside the indent and end past it. The tab itself is
//! consumed, and the columns it covers beyond the indent are written out as
//! plain spaces so the content keeps its visual column:
//!
//! ```text
//! tab stop 4, indent 3
//!
//!   |~~~V---|
//!   "\t(one)"   ->  " (one)"
//!   "   (two)"  ->  "(two)"
//! ```

use crate::scan::{advance_column, is_space, next_bol};

/// Copy `text[index..limit]` with `indent` columns removed from every line.
///
/// `index` must be a line start and `indent` must be no wider than the
/// indent of any non-blank line in the region.
pub(crate) fn copy_unindented(
    text: &str,
    mut index: usize,
    limit: usize,
    indent: usize,
    tab_stop: usize,
) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(limit - index);

    while index < limit {
        index = skip_indent(bytes, index, limit, indent, tab_stop, &mut out);

        let bol = next_bol(bytes, index, limit);
        out.push_str(&text[index..bol]);
        index = bol;
    }

    out
}

/// Consume up to `indent` columns of leading space from the line at `index`.
///
/// Returns the index of the first byte to copy. Pushes make-up spaces to `out`
/// when a tab jumps past the indent. A line that ends (or a byte that is not
/// space) before the indent is reached is an early end: nothing is pushed.
fn skip_indent(
    bytes: &[u8],
    mut index: usize,
    limit: usize,
    indent: usize,
    tab_stop: usize,
    out: &mut String,
) -> usize {
    let mut column = 0;

    while index < limit && is_space(bytes[index]) {
        column = advance_column(column, bytes[index], tab_stop);
        index += 1;

        if column >= indent {
            // Only a tab can land past the indent.
            for _ in indent..column {
                out.push(' ');
            }
            break;
        }
    }

    index
}

#[cfg(test)]
mod tests;
