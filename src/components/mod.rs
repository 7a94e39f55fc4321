//! UI Components
//!
//! Leptos components for the quote form and the saved list.

mod quote_form;
mod quote_toolbar;
mod saved_quotes;
mod totals_panel;

pub use quote_form::QuoteForm;
pub use quote_toolbar::QuoteToolbar;
pub use saved_quotes::SavedQuotes;
pub use totals_panel::TotalsPanel;
