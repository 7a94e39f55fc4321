//! Test Doubles
//!
//! Deterministic identifiers and a manually driven timer.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::ids::IdGenerator;
use crate::session::{ScheduledTask, Timer};

/// Yields `quote-1`, `quote-2`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: Cell<u32>,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn generate_id(&self) -> String {
        let n = self.next.get() + 1;
        self.next.set(n);
        format!("quote-{}", n)
    }
}

struct PendingCallback {
    id: u64,
    due: Duration,
    run: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct VirtualClock {
    now: Duration,
    next_id: u64,
    queue: Vec<PendingCallback>,
}

/// Timer driven by [`ManualTimer::advance`]; clones share one clock
#[derive(Clone, Default)]
pub struct ManualTimer {
    clock: Rc<RefCell<VirtualClock>>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of callbacks still waiting
    pub fn pending(&self) -> usize {
        self.clock.borrow().queue.len()
    }

    /// Move the clock forward, running due callbacks in order
    ///
    /// Callbacks run without the clock borrowed, so they may start or
    /// cancel timers themselves.
    pub fn advance(&self, by: Duration) {
        let target = self.clock.borrow().now + by;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let due = clock
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, cb)| cb.due <= target)
                    .min_by_key(|(_, cb)| (cb.due, cb.id))
                    .map(|(index, _)| index);
                match due {
                    Some(index) => {
                        let callback = clock.queue.remove(index);
                        clock.now = callback.due;
                        Some(callback.run)
                    }
                    None => {
                        clock.now = target;
                        None
                    }
                }
            };
            match next {
                Some(run) => run(),
                None => break,
            }
        }
    }
}

impl Timer for ManualTimer {
    fn start(&self, delay: Duration, on_elapsed: Box<dyn FnOnce()>) -> Box<dyn ScheduledTask> {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let due = clock.now + delay;
        clock.queue.push(PendingCallback { id, due, run: on_elapsed });
        Box::new(ManualTask {
            id,
            clock: Rc::downgrade(&self.clock),
        })
    }
}

struct ManualTask {
    id: u64,
    clock: Weak<RefCell<VirtualClock>>,
}

impl ScheduledTask for ManualTask {
    fn cancel(self: Box<Self>) {
        if let Some(clock) = self.clock.upgrade() {
            clock.borrow_mut().queue.retain(|cb| cb.id != self.id);
        }
    }
}
