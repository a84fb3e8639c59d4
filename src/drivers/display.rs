//! Multiplexed 7-segment display driver.
//!
//! Four digits share one segment bus; only one digit-select line may be
//! asserted at a time, and persistence of vision fuses the rapid scan into
//! a steady image.  The anti-ghosting rule is enforced by step order in
//! [`SegmentDisplay::render_digit`]: the segment bus is always settled
//! before a digit is selected, and the digit is always deselected before
//! the function returns.
//!
//! The driver is the sole owner of the configured line state.  It is
//! generic over [`LinePort`], so the same code runs against the ESP-IDF
//! GPIO adapter on target and against a recording mock in tests.

use log::{error, info};

use crate::app::ports::{Level, LinePort};
use crate::clock::{DisplayFrame, DIGIT_COUNT};
use crate::config::DisplayConfig;
use crate::error::{Error, Result};
use crate::glyphs::{self, Segment};
use crate::pins::DisplayPins;

pub struct SegmentDisplay<P: LinePort> {
    port: P,
    pins: DisplayPins,
    dwell_us: u32,
}

impl<P: LinePort> SegmentDisplay<P> {
    /// Validate the wiring tables and claim every display line.
    ///
    /// Segments start OFF (low) and selects start deasserted (high), so the
    /// display is dark until the first render.  On any claim failure the
    /// already-claimed lines are released before the error is returned —
    /// the caller never holds partial hardware state.
    pub fn new(mut port: P, pins: DisplayPins, config: &DisplayConfig) -> Result<Self> {
        pins.validate()?;

        for (segment, line) in pins.segments {
            if let Err(e) = port.claim_output(line, Level::Low) {
                error!("display: claiming segment {segment:?} line {line} failed: {e}");
                port.release_all();
                return Err(Error::Init("segment line claim failed"));
            }
        }
        for (digit, line) in pins.digit_select.into_iter().enumerate() {
            if let Err(e) = port.claim_output(line, Level::High) {
                error!("display: claiming digit {digit} select line {line} failed: {e}");
                port.release_all();
                return Err(Error::Init("digit select line claim failed"));
            }
        }

        info!(
            "display: {} segment + {} select lines claimed",
            pins.segments.len(),
            pins.digit_select.len()
        );
        Ok(Self {
            port,
            pins,
            dwell_us: config.digit_dwell_us,
        })
    }

    /// Render one glyph on one digit for a single dwell interval.
    ///
    /// Ordering:
    /// 1. drive all eight segment lines to the new glyph (stale segments
    ///    are turned off because every line is written, every time);
    /// 2. assert the digit's select line (active-low);
    /// 3. hold for the dwell interval;
    /// 4. deselect before returning.
    ///
    /// Postcondition on every path, including errors: no digit is left
    /// selected.  An unsupported character fails before any line is
    /// touched.
    pub fn render_digit(&mut self, digit: usize, ch: char, dot: bool) -> Result<()> {
        if digit >= DIGIT_COUNT {
            return Err(Error::Config("digit index out of range"));
        }
        let glyph = glyphs::encode(ch)?;

        for (segment, line) in self.pins.segments {
            let lit = match segment {
                Segment::Dp => dot,
                s => glyph.contains(s),
            };
            self.port
                .write(line, if lit { Level::High } else { Level::Low });
        }

        // Segment bus settled; selection is active-low.
        let select = self.pins.digit_select[digit];
        self.port.write(select, Level::Low);
        dwell(self.dwell_us);
        self.port.write(select, Level::High);
        Ok(())
    }

    /// Render a full frame, digits 0..3 left to right.
    pub fn render_frame(&mut self, frame: &DisplayFrame) -> Result<()> {
        for (digit, &(ch, dot)) in frame.iter().enumerate() {
            self.render_digit(digit, ch, dot)?;
        }
        Ok(())
    }

    /// All segments off, all digits deselected.
    pub fn blank(&mut self) {
        for (_, line) in self.pins.segments {
            self.port.write(line, Level::Low);
        }
        for line in self.pins.digit_select {
            self.port.write(line, Level::High);
        }
    }

    /// Light every segment and dot on every digit for `frames` scan cycles
    /// so dead segments show up on the bench.
    pub fn lamp_test(&mut self, frames: u32) -> Result<()> {
        for _ in 0..frames {
            for digit in 0..DIGIT_COUNT {
                self.render_digit(digit, '8', true)?;
            }
        }
        Ok(())
    }

    /// Blank the display and release every claimed line.  Consumes the
    /// driver: once released, the hardware handle is gone.
    pub fn release(mut self) {
        self.blank();
        self.port.release_all();
        info!("display: all lines released");
    }
}

/// Hold the currently selected digit for the dwell interval.
///
/// Busy-waits on target: the dwell is shorter than one FreeRTOS tick, so
/// a task sleep would round it up to 10 ms.  The host sim just sleeps.
#[cfg(target_os = "espidf")]
fn dwell(us: u32) {
    unsafe { esp_idf_svc::sys::esp_rom_delay_us(us) }
}

#[cfg(not(target_os = "espidf"))]
fn dwell(us: u32) {
    std::thread::sleep(std::time::Duration::from_micros(u64::from(us)));
}
