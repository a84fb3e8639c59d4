//! Shutdown signalling.
//!
//! A single ISR-safe flag bridges the boot-button interrupt (or any other
//! external stop signal) to the refresh loop.  The loop polls the flag
//! between cycles, so an in-progress digit always finishes deselecting
//! before cleanup runs.

use core::sync::atomic::{AtomicBool, Ordering};

static SHUTDOWN_REQUESTED: AtomicBool = AtomicBool::new(false);

/// Request shutdown.  Safe to call from ISR context.
pub fn request() {
    SHUTDOWN_REQUESTED.store(true, Ordering::Release);
}

/// Whether shutdown has been requested.
pub fn requested() -> bool {
    SHUTDOWN_REQUESTED.load(Ordering::Acquire)
}

/// The process-wide flag, for wiring into the refresh loop.
pub fn flag() -> &'static AtomicBool {
    &SHUTDOWN_REQUESTED
}
