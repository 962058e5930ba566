//! Validated tab-stop width.

use std::fmt;
use std::num::{NonZeroUsize, ParseIntError};
use std::str::FromStr;

use thiserror::Error;

use crate::UnindentError;

/// Column interval between tab stops. Always at least 1.
///
/// A tab advances the column to the next multiple of this width. The default
/// is [`TabStop::DEFAULT`] (8 columns).
///
/// # Example
///
/// ```
/// use unindent_core::TabStop;
///
/// let four = TabStop::new(4)?;
/// assert_eq!(four.get(), 4);
/// assert!(TabStop::new(0).is_err());
/// assert_eq!("2".parse::<TabStop>()?.get(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabStop(NonZeroUsize);

impl TabStop {
    /// The conventional terminal tab stop of 8 columns.
    pub const DEFAULT: TabStop = match NonZeroUsize::new(8) {
        Some(width) => TabStop(width),
        None => unreachable!(),
    };

    /// Create a tab stop of `width` columns.
    ///
    /// Returns [`UnindentError::TabStopOutOfRange`] when `width` is 0.
    pub const fn new(width: usize) -> Result<Self, UnindentError> {
        match NonZeroUsize::new(width) {
            Some(width) => Ok(TabStop(width)),
            None => Err(UnindentError::TabStopOutOfRange { tab_stop: width }),
        }
    }

    /// Width in columns.
    #[inline]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for TabStop {
    fn default() -> Self {
        TabStop::DEFAULT
    }
}

impl From<NonZeroUsize> for TabStop {
    fn from(width: NonZeroUsize) -> Self {
        TabStop(width)
    }
}

impl TryFrom<usize> for TabStop {
    type Error = UnindentError;

    fn try_from(width: usize) -> Result<Self, Self::Error> {
        TabStop::new(width)
    }
}

impl fmt::Display for TabStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Failure to read a [`TabStop`] from text, e.g. a config value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseTabStopError {
    /// The text is not an unsigned integer.
    #[error("invalid tab stop: {0}")]
    Invalid(#[from] ParseIntError),

    /// The integer is not a valid tab stop.
    #[error(transparent)]
    OutOfRange(#[from] UnindentError),
}

impl FromStr for TabStop {
    type Err = ParseTabStopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let width: usize = s.trim().parse()?;
        Ok(TabStop::new(width)?)
    }
}
