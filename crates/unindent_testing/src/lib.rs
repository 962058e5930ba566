//! Test support for `unindent_core`.
//!
//! Unindenting must behave the same under every line-ending style, so the
//! tests write their fixtures as lists of lines and join them with each
//! [`NewLineMode`] in turn.

use std::fmt;
use std::sync::Once;

/// Line-ending style used to join fixture lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NewLineMode {
    /// `\r\n`
    CrLf,
    /// `\r`
    Cr,
    /// `\n`
    Lf,
}

impl NewLineMode {
    /// Every mode, for running one test under each.
    pub const ALL: [NewLineMode; 3] = [NewLineMode::CrLf, NewLineMode::Cr, NewLineMode::Lf];

    /// The line-ending string.
    pub const fn as_str(self) -> &'static str {
        match self {
            NewLineMode::CrLf => "\r\n",
            NewLineMode::Cr => "\r",
            NewLineMode::Lf => "\n",
        }
    }

    /// Join `lines` with this line ending. No ending is added after the last
    /// line; end the list with `""` to get one.
    pub fn lines(self, lines: &[&str]) -> String {
        lines.join(self.as_str())
    }
}

impl fmt::Display for NewLineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NewLineMode::CrLf => "CRLF",
            NewLineMode::Cr => "CR",
            NewLineMode::Lf => "LF",
        };
        f.write_str(name)
    }
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output in tests.
///
/// Safe to call from every test. Only installs a subscriber when `RUST_LOG`
/// is set, e.g. `RUST_LOG=unindent_core=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let installed = tracing_subscriber::registry()
                .with(tracing_subscriber::fmt::layer().with_target(true).with_test_writer())
                .with(filter)
                .try_init();
            if let Err(err) = installed {
                eprintln!("tracing not initialized: {err}");
            }
        }
    });
}
