//! Byte-level line scanning shared by the analyzer and the copier.
//!
//! Every byte these helpers look for is ASCII (space, tab, CR, LF), so any
//! index they return lands on a UTF-8 character boundary of the source `&str`.
//! All scans are bounded by an explicit `limit`; bytes at or past `limit` are
//! never examined.

/// Returns `true` for the bytes that make up indentation: space and tab.
#[inline]
pub(crate) const fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t')
}

/// Returns `true` for line terminator bytes: CR and LF.
///
/// Terminators may be mixed freely; `\r\n`, `\n\r` and `\r\r` all read as
/// one run of terminators.
#[inline]
pub(crate) const fn is_eol(b: u8) -> bool {
    matches!(b, b'\r' | b'\n')
}

/// Advance `column` past one indentation byte.
///
/// A space moves one column. A tab jumps to the next multiple of `tab_stop`
/// strictly greater than `column`. Any other byte leaves the column alone.
/// Columns saturate at `usize::MAX`, so huge tab stops cannot overflow.
#[inline]
pub(crate) const fn advance_column(column: usize, b: u8, tab_stop: usize) -> usize {
    match b {
        b' ' => column.saturating_add(1),
        b'\t' => (column - column % tab_stop).saturating_add(tab_stop),
        _ => column,
    }
}

/// Index of the first terminator in `bytes[index..limit]`, or `limit`.
#[inline]
pub(crate) fn next_eol(bytes: &[u8], index: usize, limit: usize) -> usize {
    if index >= limit {
        return limit;
    }
    memchr::memchr2(b'\r', b'\n', &bytes[index..limit]).map_or(limit, |offset| index + offset)
}

/// Index of the start of the next line after `index`, or `limit`.
///
/// Finds the next terminator, then skips the whole contiguous run of
/// terminators after it. Blank lines without any space in them are therefore
/// passed over in one step.
pub(crate) fn next_bol(bytes: &[u8], index: usize, limit: usize) -> usize {
    let mut index = next_eol(bytes, index, limit);
    while index < limit && is_eol(bytes[index]) {
        index += 1;
    }
    index
}
