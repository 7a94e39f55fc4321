//! Autosave Scheduler
//!
//! Debounces draft edits into a single deferred write.
//!
//! ```text
//! Idle ──edit──▶ Pending(t1) ──edit──▶ Pending(t2) ──elapsed(t2)──▶ Idle
//!                     │                     │
//!                     └──cancel──▶ Idle ◀───┘
//! ```
//!
//! Every arm hands out a fresh [`Ticket`]. Only the callback carrying the
//! current ticket is honoured, so a timer that fires after being replaced
//! or cancelled is a no-op.

use std::time::Duration;

use super::timer::{ScheduledTask, Timer};

/// Identifies one armed quiet period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutosaveState {
    /// No write scheduled
    Idle,
    /// A write is scheduled once the quiet period for this ticket elapses
    Pending(Ticket),
}

/// Owns the debounce timer of a session
pub struct AutosaveScheduler {
    timer: Box<dyn Timer>,
    quiet_period: Duration,
    state: AutosaveState,
    task: Option<Box<dyn ScheduledTask>>,
    next_generation: u64,
    mounted: bool,
}

impl AutosaveScheduler {
    pub fn new(timer: Box<dyn Timer>, quiet_period: Duration) -> Self {
        Self {
            timer,
            quiet_period,
            state: AutosaveState::Idle,
            task: None,
            next_generation: 0,
            mounted: false,
        }
    }

    pub fn state(&self) -> AutosaveState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, AutosaveState::Pending(_))
    }

    /// Record the value displayed at mount; it never arms the timer
    pub fn observe_mount(&mut self) {
        self.mounted = true;
    }

    /// Record a draft change and restart the quiet period
    ///
    /// `on_elapsed` runs with the ticket of this arm once the quiet period
    /// passes without another change. Returns `None` when the change was the
    /// first value observed (nothing is armed).
    pub fn observe_change(&mut self, on_elapsed: impl FnOnce(Ticket) + 'static) -> Option<Ticket> {
        if !self.mounted {
            self.mounted = true;
            return None;
        }

        self.stop_timer();
        let ticket = Ticket(self.next_generation);
        self.next_generation += 1;
        self.task = Some(self.timer.start(self.quiet_period, Box::new(move || on_elapsed(ticket))));
        self.state = AutosaveState::Pending(ticket);
        log::debug!("Autosave armed ({:?}, {:?})", ticket, self.quiet_period);
        Some(ticket)
    }

    /// Drop any scheduled write; returns whether one was pending
    pub fn cancel(&mut self) -> bool {
        self.stop_timer();
        let was_pending = self.is_pending();
        if was_pending {
            log::debug!("Autosave cancelled");
        }
        self.state = AutosaveState::Idle;
        was_pending
    }

    /// Called from the timer callback; true when `ticket` is still current
    pub fn take_due(&mut self, ticket: Ticket) -> bool {
        match self.state {
            AutosaveState::Pending(current) if current == ticket => {
                self.task = None;
                self.state = AutosaveState::Idle;
                true
            }
            _ => {
                log::debug!("Ignoring stale autosave {:?}", ticket);
                false
            }
        }
    }

    fn stop_timer(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel();
        }
    }
}
