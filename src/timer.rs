//! Browser Timer
//!
//! Autosave quiet periods backed by `setTimeout` via gloo.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use quote_core::{ScheduledTask, Timer};

/// Longest delay `setTimeout` honours; larger values fire immediately
const MAX_TIMEOUT_MS: u32 = i32::MAX as u32;

/// Delay in whole milliseconds, clamped to what browsers accept
fn timeout_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis())
        .unwrap_or(u32::MAX)
        .min(MAX_TIMEOUT_MS)
}

pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn start(&self, delay: Duration, on_elapsed: Box<dyn FnOnce()>) -> Box<dyn ScheduledTask> {
        Box::new(BrowserTask(Timeout::new(timeout_millis(delay), on_elapsed)))
    }
}

/// Dropping the Timeout also clears it
struct BrowserTask(Timeout);

impl ScheduledTask for BrowserTask {
    fn cancel(self: Box<Self>) {
        let BrowserTask(timeout) = *self;
        let _ = timeout.cancel();
    }
}
