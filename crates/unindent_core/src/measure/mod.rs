//! Indent measurement.
//!
//! One left-to-right pass over the trimmed region finds the smallest column
//! at which any non-blank line starts its content. Blank lines (nothing but
//! spaces and tabs before the terminator) never take part, however much
//! space they hold.

use crate::scan::{advance_column, is_eol, is_space, next_bol};

/// Result of measuring the trimmed region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct IndentStats {
    /// Smallest content column over all non-blank lines, in expanded columns.
    /// `usize::MAX` when there are no non-blank lines.
    pub width: usize,
    /// Number of non-blank lines.
    pub count: usize,
}

impl IndentStats {
    /// Returns `true` when unindenting would not change any line.
    #[inline]
    pub(crate) const fn is_trivial(self) -> bool {
        self.width == 0 || self.count == 0
    }
}

/// Measure the common indent of `bytes[index..limit]`.
pub(crate) fn measure(bytes: &[u8], mut index: usize, limit: usize, tab_stop: usize) -> IndentStats {
    let mut column = 0;
    let mut width = usize::MAX;
    let mut count = 0;

    while index < limit {
        let b = bytes[index];
        index += 1;

        if is_space(b) {
            column = advance_column(column, b, tab_stop);
        } else if is_eol(b) {
            // Blank line
            column = 0;
        } else {
            width = width.min(column);
            count += 1;

            // The rest of this line cannot change the indent.
            index = next_bol(bytes, index, limit);
            column = 0;
        }
    }

    IndentStats { width, count }
}
