//! Session Layer
//!
//! The in-edit draft, the debounced autosave and the facade tying them to
//! the item store.

mod autosave;
mod draft;
mod quote_session;
mod tests;
mod timer;

pub use autosave::{AutosaveScheduler, AutosaveState, Ticket};
pub use draft::{Anchor, Draft};
pub use quote_session::QuoteSession;
pub use timer::{ScheduledTask, Timer};
