//! Muxclock Firmware — Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                 │
//! │                                                          │
//! │   GpioLinePort            SystemClock                    │
//! │   (LinePort)              (ClockPort)                    │
//! │                                                          │
//! │  ─────────────── Port Trait Boundary ─────────────────   │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │        RefreshLoop (pure logic)                    │  │
//! │  │  ClockFormatter · SegmentDisplay multiplexer       │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use muxclock::adapters::gpio::{self, GpioLinePort};
use muxclock::adapters::time::SystemClock;
use muxclock::app::service::RefreshLoop;
use muxclock::config::DisplayConfig;
use muxclock::drivers::display::SegmentDisplay;
use muxclock::pins::{self, DisplayPins};
use muxclock::shutdown;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("muxclock v{}", env!("CARGO_PKG_VERSION"));

    let config = DisplayConfig::default();

    // ── 2. Claim the display lines ────────────────────────────
    // Fatal on failure: the refresh loop never starts, and new() has
    // already released anything it claimed.
    let display = SegmentDisplay::new(GpioLinePort::new(), DisplayPins::board_default(), &config)
        .map_err(|e| anyhow::anyhow!("display init failed: {e}"))?;

    // ── 3. Arm the shutdown button ────────────────────────────
    if let Err(e) = gpio::install_shutdown_button(pins::SHUTDOWN_BUTTON_GPIO) {
        display.release();
        return Err(anyhow::anyhow!("shutdown button init failed: {e}"));
    }

    // ── 4. Refresh loop (runs until shutdown is requested) ────
    let clock = SystemClock::new();
    RefreshLoop::new(config, shutdown::flag())
        .run(display, &clock)
        .map_err(|e| anyhow::anyhow!("refresh loop failed: {e}"))?;

    info!("muxclock: clean exit");
    Ok(())
}
