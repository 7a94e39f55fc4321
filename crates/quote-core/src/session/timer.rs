//! Timer Capability
//!
//! Deferred one-shot callbacks, injected so the browser can use real
//! timeouts and tests can drive a virtual clock.

use std::time::Duration;

/// Handle to a started timer
pub trait ScheduledTask {
    /// Stop the timer; its callback will not run
    fn cancel(self: Box<Self>);
}

/// Starts one-shot timers
pub trait Timer {
    fn start(&self, delay: Duration, on_elapsed: Box<dyn FnOnce()>) -> Box<dyn ScheduledTask>;
}
