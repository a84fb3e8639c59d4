//! Port traits — the boundary between display logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ RefreshLoop (domain)
//! ```
//!
//! Driven adapters (GPIO lines, the wall clock) implement these traits.
//! The refresh loop and the multiplexer consume them via generics, so the
//! core never touches hardware directly and the whole pipeline runs against
//! mocks on the host.

use crate::clock::TimeValue;

// ───────────────────────────────────────────────────────────────
// Line port (driven adapter: domain → GPIO)
// ───────────────────────────────────────────────────────────────

/// Logic level on a GPIO line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

/// Errors from [`LinePort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineError {
    /// The line could not be configured as an output; carries the driver
    /// return code.
    ClaimFailed(i32),
}

impl core::fmt::Display for LineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ClaimFailed(rc) => write!(f, "line claim failed (rc={rc})"),
        }
    }
}

/// Write-side port over the board's GPIO lines.
///
/// Line writes are immediate, local operations — no transient-failure model
/// applies, so only claiming can fail.  Implementations must make
/// `release_all` return every claimed line to a safe, unconfigured state.
pub trait LinePort {
    /// Claim a line as a digital output, driving it to `initial`.
    fn claim_output(&mut self, line: i32, initial: Level) -> Result<(), LineError>;

    /// Set the logic level of a previously claimed line.
    fn write(&mut self, line: i32, level: Level);

    /// Release every line claimed through this port.
    fn release_all(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Clock port (driven adapter: wall clock → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port for the current local time of day.
pub trait ClockPort {
    /// The current hour/minute/second, or `None` while the wall clock is
    /// not yet trustworthy (e.g. pre-NTP on a cold boot).
    fn now(&self) -> Option<TimeValue>;
}
