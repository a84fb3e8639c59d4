//! System configuration parameters
//!
//! All tunable parameters for the clock display.  The timing constants are
//! named here so the flicker invariant stays auditable instead of hiding in
//! magic numbers.

use serde::{Deserialize, Serialize};

use crate::clock::ClockMode;

/// A full 4-digit refresh must complete inside this window for the eye to
/// fuse the multiplexed digits into a steady image (~60 Hz perceived).
pub const FLICKER_BUDGET_US: u32 = 16_000;

/// Core display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// 12-hour or 24-hour rendering.
    pub mode: ClockMode,

    // --- Timing ---
    /// How long each digit stays selected (microseconds).
    pub digit_dwell_us: u32,
    /// Pause between refresh cycles (milliseconds).  The displayed value is
    /// recomputed at this cadence, deliberately coarser than the per-digit
    /// dwell.
    pub frame_idle_ms: u32,

    // --- Startup ---
    /// Frames of the all-segments pattern shown at boot so dead segments
    /// are visible on the bench.
    pub lamp_test_frames: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            mode: ClockMode::Twelve,

            // Timing
            digit_dwell_us: 1_000, // 4-digit cycle ≈ 4 ms
            frame_idle_ms: 10,     // ~100 Hz value recompute

            // Startup
            lamp_test_frames: 50, // ~200 ms of "8.8.8.8."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::DIGIT_COUNT;

    #[test]
    fn default_config_is_sane() {
        let c = DisplayConfig::default();
        assert!(c.digit_dwell_us > 0);
        assert!(c.frame_idle_ms > 0);
        assert!(c.lamp_test_frames > 0);
    }

    #[test]
    fn full_cycle_stays_below_flicker_budget() {
        let c = DisplayConfig::default();
        assert!(
            c.digit_dwell_us * (DIGIT_COUNT as u32) < FLICKER_BUDGET_US,
            "4-digit cycle must finish below the flicker-fusion threshold"
        );
    }

    #[test]
    fn dwell_is_finer_than_frame_idle() {
        let c = DisplayConfig::default();
        assert!(
            c.digit_dwell_us < c.frame_idle_ms * 1_000,
            "per-digit dwell should be finer-grained than the frame cadence"
        );
    }

    #[test]
    fn serde_roundtrip() {
        let c = DisplayConfig::default();
        let json = serde_json::to_string(&c).unwrap();
        let c2: DisplayConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c.mode, c2.mode);
        assert_eq!(c.digit_dwell_us, c2.digit_dwell_us);
        assert_eq!(c.frame_idle_ms, c2.frame_idle_ms);
        assert_eq!(c.lamp_test_frames, c2.lamp_test_frames);
    }
}
