//! Quote Pad App
//!
//! Opens the quote session and lays out the form beside the saved list.

use leptos::prelude::*;
use quote_core::{MemoryMedium, QuoteSession, SessionConfig, StorageMedium, UuidGenerator};
use reactive_stores::Store;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::components::{QuoteForm, QuoteToolbar, SavedQuotes, TotalsPanel};
use crate::context::AppContext;
use crate::logger;
use crate::storage::{BrowserStorage, CONFIG_KEY};
use crate::store::{store_sync_session, AppState};
use crate::timer::BrowserTimer;

/// Open the session on localStorage, or on memory when storage is denied
fn open_session() -> QuoteSession {
    let medium: Box<dyn StorageMedium> = match BrowserStorage::open() {
        Some(storage) => Box::new(storage),
        None => {
            log::warn!("localStorage unavailable, quotes will not survive a reload");
            Box::new(MemoryMedium::new())
        }
    };

    let config = SessionConfig::from_json_or_default(medium.read(CONFIG_KEY).as_deref());
    logger::init(config.level_filter());
    QuoteSession::new(&config, medium, BrowserTimer, UuidGenerator)
}

/// Flush a pending autosave when the page is hidden or closed
fn bind_pagehide(ctx: AppContext) {
    let on_pagehide = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        ctx.flush();
    });

    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback(
            "pagehide",
            on_pagehide.as_ref().unchecked_ref(),
        );
    }
    on_pagehide.forget();
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    let session = open_session();
    store_sync_session(&store, &session);
    session.set_listener(move |session| store_sync_session(&store, session));

    let ctx = AppContext::new(session, store);
    provide_context(store);
    provide_context(ctx);
    bind_pagehide(ctx);

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Quote Pad"</h1>
                <QuoteToolbar />
                <QuoteForm />
                <TotalsPanel />
            </main>

            <SavedQuotes />
        </div>
    }
}
