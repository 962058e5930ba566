//! Trimmed-region boundaries.
//!
//! The region that gets measured and copied starts after at most one leading
//! line break and stops before any trailing run of spaces and tabs. Trailing
//! line breaks stay inside the region.

use crate::scan::{is_eol, is_space};

/// Byte bounds of the trimmed region: `start..limit`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Bounds {
    /// First byte after the optional leading line break.
    pub start: usize,
    /// One past the last byte that is not a trailing space or tab.
    pub limit: usize,
}

impl Bounds {
    /// Compute the trimmed bounds of `bytes`.
    pub(crate) fn of(bytes: &[u8]) -> Self {
        let start = leading_eol_len(bytes);
        let limit = len_without_trailing_space(bytes);

        // A leading terminator is not a space, so the trailing run stops on or
        // after it.
        debug_assert!(start <= limit, "start {start} exceeds limit {limit}");

        Bounds { start, limit }
    }

    /// Returns `true` when the bounds cover all of a `len`-byte input.
    #[inline]
    pub(crate) const fn is_whole(self, len: usize) -> bool {
        self.start == 0 && self.limit == len
    }
}

/// Length of the single line break at the front of `bytes`: 0, 1, or 2.
///
/// Only `\r\n` counts as a two-byte break. `\n\r` and `\r\r` are a one-byte
/// break followed by a blank line.
fn leading_eol_len(bytes: &[u8]) -> usize {
    match bytes {
        [b'\r', b'\n', ..] => 2,
        [b, ..] if is_eol(*b) => 1,
        _ => 0,
    }
}

/// Length of `bytes` once the trailing run of spaces and tabs is dropped.
fn len_without_trailing_space(bytes: &[u8]) -> usize {
    bytes.iter().rposition(|&b| !is_space(b)).map_or(0, |i| i + 1)
}
