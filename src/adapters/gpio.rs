//! GPIO line adapter — bridges the [`LinePort`] trait to real pins.
//!
//! On ESP-IDF the adapter configures and drives lines through raw
//! `esp-idf-svc::sys` calls; on the host every operation is an in-memory
//! no-op so the full pipeline runs in tests and simulation.  This module
//! and the clock adapter are the only code in the system that touches
//! actual hardware.

use log::info;

use crate::app::ports::{Level, LineError, LinePort};
use crate::error::Error;

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

/// Concrete [`LinePort`] over the SoC's GPIO matrix.  Tracks claimed lines
/// so `release_all` can return each one to its reset state.
pub struct GpioLinePort {
    claimed: Vec<i32>,
}

impl GpioLinePort {
    pub fn new() -> Self {
        Self {
            claimed: Vec::new(),
        }
    }
}

impl Default for GpioLinePort {
    fn default() -> Self {
        Self::new()
    }
}

impl LinePort for GpioLinePort {
    fn claim_output(&mut self, line: i32, initial: Level) -> Result<(), LineError> {
        hw_claim_output(line)?;
        hw_write(line, initial);
        self.claimed.push(line);
        Ok(())
    }

    fn write(&mut self, line: i32, level: Level) {
        hw_write(line, level);
    }

    fn release_all(&mut self) {
        for line in self.claimed.drain(..) {
            hw_release(line);
        }
        info!("gpio: all claimed lines released");
    }
}

// ── Raw line operations (cfg-gated per target) ───────────────────────────

#[cfg(target_os = "espidf")]
fn hw_claim_output(line: i32) -> Result<(), LineError> {
    let cfg = gpio_config_t {
        pin_bit_mask: 1u64 << line,
        mode: gpio_mode_t_GPIO_MODE_OUTPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    // SAFETY: called once per line from the single-threaded init path.
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK as i32 {
        return Err(LineError::ClaimFailed(ret));
    }
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
fn hw_claim_output(_line: i32) -> Result<(), LineError> {
    Ok(())
}

#[cfg(target_os = "espidf")]
fn hw_write(line: i32, level: Level) {
    // SAFETY: gpio_set_level writes to an already-configured output pin;
    // single caller by construction (the refresh loop).
    unsafe {
        gpio_set_level(line, matches!(level, Level::High) as u32);
    }
}

#[cfg(not(target_os = "espidf"))]
fn hw_write(_line: i32, _level: Level) {}

#[cfg(target_os = "espidf")]
fn hw_release(line: i32) {
    // SAFETY: resets a pin this adapter configured; runs after the refresh
    // loop has stopped issuing writes.
    unsafe {
        gpio_reset_pin(line);
    }
}

#[cfg(not(target_os = "espidf"))]
fn hw_release(_line: i32) {}

// ── Shutdown button ──────────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe extern "C" fn shutdown_button_isr(_arg: *mut core::ffi::c_void) {
    // Only sets an atomic; safe in ISR context.
    crate::shutdown::request();
}

/// Configure the shutdown button as an input and register its falling-edge
/// ISR.  Call after the display lines are claimed, before the refresh loop.
#[cfg(target_os = "espidf")]
pub fn install_shutdown_button(line: i32) -> Result<(), Error> {
    // SAFETY: gpio_install_isr_service is idempotent; ESP_ERR_INVALID_STATE
    // means it was already installed (acceptable).  The handler only writes
    // the shutdown atomic.
    unsafe {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << line,
            mode: gpio_mode_t_GPIO_MODE_INPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_ENABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_NEGEDGE,
        };
        let ret = gpio_config(&cfg);
        if ret != ESP_OK as i32 {
            return Err(Error::Init("shutdown button configuration failed"));
        }

        let ret = gpio_install_isr_service(0);
        if ret != ESP_OK as i32 && ret != ESP_ERR_INVALID_STATE as i32 {
            return Err(Error::Init("GPIO ISR service install failed"));
        }
        gpio_isr_handler_add(line, Some(shutdown_button_isr), core::ptr::null_mut());
        gpio_intr_enable(line);
    }
    info!("gpio: shutdown button armed on line {line}");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn install_shutdown_button(_line: i32) -> Result<(), Error> {
    log::info!("gpio(sim): shutdown button skipped");
    Ok(())
}
