//! Refresh loop — the application core.
//!
//! ```text
//!  ClockPort ──▶ ┌──────────────────────────┐
//!                │       RefreshLoop         │ ──▶ SegmentDisplay ──▶ LinePort
//!                │  sample · format · render │
//!                └──────────────────────────┘
//! ```
//!
//! Two deliberately different timescales meet here: the loop recomputes the
//! *displayed value* every `frame_idle_ms` (~100 Hz), while the multiplexer
//! inside `render_frame` refreshes the *physical digits* at the much finer
//! per-digit dwell (~250 Hz scan).  The 1 Hz heartbeat blink comes from the
//! formatter, so it survives any cadence tuning.

use core::sync::atomic::{AtomicBool, Ordering};

use log::{info, warn};

use crate::clock::format_frame;
use crate::config::DisplayConfig;
use crate::drivers::display::SegmentDisplay;
use crate::error::Result;

use super::ports::{ClockPort, LinePort};

/// Loop lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    ShuttingDown,
}

/// Drives the display until an external shutdown request arrives, then
/// guarantees hardware cleanup.
pub struct RefreshLoop<'a> {
    config: DisplayConfig,
    stop: &'a AtomicBool,
    state: LoopState,
}

impl<'a> RefreshLoop<'a> {
    pub fn new(config: DisplayConfig, stop: &'a AtomicBool) -> Self {
        Self {
            config,
            stop,
            state: LoopState::Running,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Run until the stop flag is observed or a render fails.
    ///
    /// Takes ownership of the display so that `release()` runs on every
    /// exit path — clean shutdown, shutdown mid-cycle, or a render error.
    /// The stop flag is polled between cycles, so an in-progress digit
    /// always finishes deselecting first.
    pub fn run<P, C>(&mut self, mut display: SegmentDisplay<P>, clock: &C) -> Result<()>
    where
        P: LinePort,
        C: ClockPort,
    {
        info!("refresh loop running ({:?} mode)", self.config.mode);
        let outcome = self.spin(&mut display, clock);
        self.state = LoopState::ShuttingDown;
        display.release();
        match &outcome {
            Ok(()) => info!("refresh loop stopped, display released"),
            Err(e) => warn!("refresh loop aborted ({e}), display released"),
        }
        outcome
    }

    fn spin<P, C>(&mut self, display: &mut SegmentDisplay<P>, clock: &C) -> Result<()>
    where
        P: LinePort,
        C: ClockPort,
    {
        display.lamp_test(self.config.lamp_test_frames)?;

        let mut warned_unsynced = false;
        while !self.stop.load(Ordering::Acquire) {
            match clock.now() {
                Some(time) => {
                    warned_unsynced = false;
                    display.render_frame(&format_frame(time, self.config.mode))?;
                }
                None => {
                    // Keep the display dark rather than show garbage.
                    if !warned_unsynced {
                        warn!("wall clock not available yet, blanking display");
                        warned_unsynced = true;
                    }
                    display.blank();
                }
            }
            idle(self.config.frame_idle_ms);
        }
        Ok(())
    }
}

/// Pause between refresh cycles.  Coarse enough for the scheduler tick on
/// both targets.
fn idle(ms: u32) {
    std::thread::sleep(std::time::Duration::from_millis(u64::from(ms)));
}
