//! Unified error types for the clock firmware.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! refresh loop's error handling uniform.  All variants are `Copy` so they
//! can be passed through the loop without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A required GPIO line could not be claimed at startup.  Fatal — the
    /// refresh loop never starts.
    Init(&'static str),
    /// A character outside `'0'..='9'` / space reached the segment encoder.
    /// A contract violation, surfaced rather than silently substituted.
    UnsupportedGlyph(char),
    /// The wiring tables are invalid (duplicate line, bad digit index).
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::UnsupportedGlyph(ch) => write!(f, "unsupported glyph {ch:?}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
