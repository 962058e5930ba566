//! Unindenting of multi-line text.
//!
//! Removes the leading space common to all non-blank lines of a text block,
//! typically a multi-line string literal written at the indentation of the
//! code around it.
//!
//! # Rules
//!
//! - *Space* is any mix of space (`U+0020`) and tab (`U+0009`). A tab advances
//!   to the next tab stop; tab stops are [`TabStop`] columns apart (8 by
//!   default).
//! - Lines end with any mix of carriage return (`U+000D`) and line feed
//!   (`U+000A`). A line is *blank* if it holds nothing but space.
//! - The indent is the smallest leading-space width, in columns, over all
//!   non-blank lines. That many columns are removed from every line, blank or
//!   not. Blank lines shorter than the indent become empty.
//! - If a tab jumps past the indent, the columns beyond the indent are written
//!   as spaces to keep alignment.
//! - One leading line break is removed, so a literal may start on the line
//!   after its opening quote. Further leading blank lines are kept.
//! - Trailing space at the very end is removed, so a literal may close on a
//!   line of its own. Trailing line breaks are kept.
//!
//! # No-op Detection
//!
//! The result is a [`Cow`]. When nothing needs trimming or unindenting, the
//! input slice itself comes back (`Cow::Borrowed`, same pointer and length);
//! [`is_unchanged`] checks for that. When only trimming is needed the result
//! borrows a sub-slice of the input. Only real unindenting allocates.
//!
//! ```
//! use unindent_core::{is_unchanged, unindent};
//!
//! let text = "
//!     fn main() {
//!         run();
//!     }
//!     ";
//! assert_eq!(unindent(text), "fn main() {\n    run();\n}\n");
//!
//! let plain = "already flat";
//! assert!(is_unchanged(plain, &unindent(plain)));
//! ```

mod bounds;
mod copy;
mod error;
mod measure;
mod scan;
mod tab_stop;

use std::borrow::Cow;

use bounds::Bounds;

pub use error::UnindentError;
pub use tab_stop::{ParseTabStopError, TabStop};

/// Unindent `text` with the default tab stop of 8 columns.
///
/// See the [crate docs](crate) for the rules.
pub fn unindent(text: &str) -> Cow<'_, str> {
    unindent_with_tab_stop(text, TabStop::DEFAULT)
}

/// Unindent `text` with tab stops `tab_stop` columns apart.
///
/// Returns [`UnindentError::TabStopOutOfRange`] when `tab_stop` is 0.
pub fn unindent_with(text: &str, tab_stop: usize) -> Result<Cow<'_, str>, UnindentError> {
    let tab_stop = TabStop::new(tab_stop)?;
    Ok(unindent_with_tab_stop(text, tab_stop))
}

/// Unindent possibly-absent `text`.
///
/// For callers whose text may be missing, such as optional fields of
/// deserialized data. Absent text is an error, never an empty string. The
/// text is checked before the tab stop.
pub fn unindent_nullable(
    text: Option<&str>,
    tab_stop: usize,
) -> Result<Cow<'_, str>, UnindentError> {
    let text = text.ok_or(UnindentError::NullText)?;
    unindent_with(text, tab_stop)
}

/// Unindent `text` with an already validated tab stop.
#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(len = text.len(), tab_stop = tab_stop.get())
)]
pub fn unindent_with_tab_stop(text: &str, tab_stop: TabStop) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    let tab_stop = tab_stop.get();

    // Ignore one leading line break and any trailing space.
    let bounds = Bounds::of(bytes);
    let Bounds { start, limit } = bounds;

    let stats = measure::measure(bytes, start, limit, tab_stop);
    tracing::trace!(start, limit, indent = stats.width, count = stats.count, "measured");

    if stats.is_trivial() {
        if bounds.is_whole(text.len()) {
            tracing::trace!("unchanged");
            return Cow::Borrowed(text);
        }
        return Cow::Borrowed(&text[start..limit]);
    }

    Cow::Owned(copy::copy_unindented(text, start, limit, stats.width, tab_stop))
}

/// Returns `true` when `output` is `input` itself rather than a copy or a
/// sub-slice, i.e. when unindenting changed nothing.
///
/// ```
/// use unindent_core::{is_unchanged, unindent};
///
/// let text = "ab\n";
/// assert!(is_unchanged(text, &unindent(text)));
///
/// let text = "ab\n  ";
/// assert!(!is_unchanged(text, &unindent(text)));
/// ```
#[inline]
pub fn is_unchanged(input: &str, output: &str) -> bool {
    std::ptr::eq(input, output)
}

#[cfg(test)]
mod tests;
