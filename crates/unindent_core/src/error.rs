//! Argument errors.
//!
//! Both are caller mistakes reported before any scanning starts, so a failed
//! call never produces partial output.

use thiserror::Error;

/// An invalid argument passed to one of the unindent entry points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum UnindentError {
    /// The text to unindent was absent.
    #[error("text to unindent is null")]
    NullText,

    /// The tab stop was zero.
    #[error("tab stop {tab_stop} is out of range: must be at least 1")]
    TabStopOutOfRange {
        /// The rejected value.
        tab_stop: usize,
    },
}
