//! Wall-clock adapter.
//!
//! Implements [`ClockPort`] for the system clock.
//!
//! - **`target_os = "espidf"`** — reads `gettimeofday()` and converts to
//!   local time with `localtime_r()`.  Obviously-unsynced time (before the
//!   RTC has been set, e.g. pre-NTP) reports as `None` so the display
//!   blanks instead of showing garbage.
//! - **`not(target_os = "espidf")`** — derives UTC hour/minute/second from
//!   `std::time::SystemTime` for host-side testing and simulation.

use crate::app::ports::ClockPort;
use crate::clock::TimeValue;

/// Clock adapter over the platform's time-of-day source.  The display
/// driver never sets or adjusts the clock; this is read-only.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_os = "espidf")]
impl ClockPort for SystemClock {
    fn now(&self) -> Option<TimeValue> {
        use core::ptr;

        let mut tv = esp_idf_svc::sys::timeval {
            tv_sec: 0,
            tv_usec: 0,
        };
        if unsafe { esp_idf_svc::sys::gettimeofday(&mut tv, ptr::null_mut()) } != 0 {
            return None;
        }
        // Reject obviously unsynced time (e.g. before 2020-01-01).
        const EPOCH_2020: i64 = 1_577_836_800;
        if tv.tv_sec < EPOCH_2020 {
            return None;
        }

        let secs = tv.tv_sec as esp_idf_svc::sys::time_t;
        let mut tm: esp_idf_svc::sys::tm = unsafe { core::mem::zeroed() };
        if unsafe { esp_idf_svc::sys::localtime_r(&secs, &mut tm) }.is_null() {
            return None;
        }
        if !(0..24).contains(&tm.tm_hour) || !(0..60).contains(&tm.tm_min) {
            return None;
        }
        // tm_sec may report 60 on a leap second; fold it into :59.
        let second = tm.tm_sec.clamp(0, 59);
        TimeValue::new(tm.tm_hour as u8, tm.tm_min as u8, second as u8)
    }
}

#[cfg(not(target_os = "espidf"))]
impl ClockPort for SystemClock {
    /// Host builds have no timezone database wired in; the sim shows UTC.
    fn now(&self) -> Option<TimeValue> {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .ok()?
            .as_secs();
        TimeValue::new(
            ((secs / 3600) % 24) as u8,
            ((secs / 60) % 60) as u8,
            (secs % 60) as u8,
        )
    }
}
