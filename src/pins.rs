//! GPIO line assignments for the clock display board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding line numbers.  Change a line here and it propagates everywhere.
//!
//! The board wires all four 7-segment digits to one shared segment bus; each
//! digit has its own select line (common anode, so selection is active-low).

use crate::error::{Error, Result};
use crate::glyphs::Segment;

// ---------------------------------------------------------------------------
// Shared segment bus (one line per segment, driven HIGH to light)
// ---------------------------------------------------------------------------

pub const SEG_A_GPIO: i32 = 8;
pub const SEG_B_GPIO: i32 = 10;
pub const SEG_C_GPIO: i32 = 23;
pub const SEG_D_GPIO: i32 = 27;
pub const SEG_E_GPIO: i32 = 17;
pub const SEG_F_GPIO: i32 = 25;
pub const SEG_G_GPIO: i32 = 24;
/// Decimal point, shared like the other segment lines.
pub const SEG_DP_GPIO: i32 = 22;

// ---------------------------------------------------------------------------
// Digit select lines (active-low, left to right)
// ---------------------------------------------------------------------------

/// Tens-of-hour digit.
pub const DIGIT_0_SELECT_GPIO: i32 = 15;
/// Ones-of-hour digit.
pub const DIGIT_1_SELECT_GPIO: i32 = 3;
/// Tens-of-minute digit.
pub const DIGIT_2_SELECT_GPIO: i32 = 2;
/// Ones-of-minute digit.
pub const DIGIT_3_SELECT_GPIO: i32 = 14;

// ---------------------------------------------------------------------------
// User input
// ---------------------------------------------------------------------------

/// Boot button (active-low with internal pull-up); a falling edge requests
/// shutdown.
pub const SHUTDOWN_BUTTON_GPIO: i32 = 0;

// ---------------------------------------------------------------------------
// Wiring tables
// ---------------------------------------------------------------------------

/// Complete line assignment for one 4-digit display.
///
/// The tables are configuration data, not logic: a different board revision
/// supplies its own instance.  The `[i32; 4]` select array makes any digit
/// count other than four unrepresentable.
#[derive(Debug, Clone, Copy)]
pub struct DisplayPins {
    /// Segment identifier → GPIO line, one entry per segment including `dp`.
    pub segments: [(Segment, i32); 8],
    /// Select line per digit position, index 0..3 left to right.
    pub digit_select: [i32; 4],
}

impl DisplayPins {
    /// Line assignment matching the reference board schematic.
    pub const fn board_default() -> Self {
        Self {
            segments: [
                (Segment::A, SEG_A_GPIO),
                (Segment::B, SEG_B_GPIO),
                (Segment::C, SEG_C_GPIO),
                (Segment::D, SEG_D_GPIO),
                (Segment::E, SEG_E_GPIO),
                (Segment::F, SEG_F_GPIO),
                (Segment::G, SEG_G_GPIO),
                (Segment::Dp, SEG_DP_GPIO),
            ],
            digit_select: [
                DIGIT_0_SELECT_GPIO,
                DIGIT_1_SELECT_GPIO,
                DIGIT_2_SELECT_GPIO,
                DIGIT_3_SELECT_GPIO,
            ],
        }
    }

    /// Reject tables that assign one GPIO line to two roles.  Runs once at
    /// startup, before any line is claimed.
    pub fn validate(&self) -> Result<()> {
        let mut lines = [0i32; 12];
        for (i, (_, line)) in self.segments.iter().enumerate() {
            lines[i] = *line;
        }
        for (i, line) in self.digit_select.iter().enumerate() {
            lines[8 + i] = *line;
        }
        for i in 0..lines.len() {
            for j in (i + 1)..lines.len() {
                if lines[i] == lines[j] {
                    return Err(Error::Config("duplicate GPIO line assignment"));
                }
            }
        }
        Ok(())
    }
}

impl Default for DisplayPins {
    fn default() -> Self {
        Self::board_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_default_validates() {
        assert!(DisplayPins::board_default().validate().is_ok());
    }

    #[test]
    fn duplicate_segment_line_rejected() {
        let mut pins = DisplayPins::board_default();
        pins.segments[1].1 = SEG_A_GPIO;
        assert!(matches!(pins.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn segment_line_colliding_with_select_rejected() {
        let mut pins = DisplayPins::board_default();
        pins.digit_select[3] = SEG_DP_GPIO;
        assert!(matches!(pins.validate(), Err(Error::Config(_))));
    }
}
