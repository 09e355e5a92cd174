//! Web UI for playground-rs
//!
//! A Yew-based page wiring buttons and inputs to the playground helpers
//! and cosmetic animation state machines.

mod app;
mod components;
mod dom;

use playground_rs::{Action, BINDINGS, EventKind};
use wasm_bindgen::prelude::*;

/// Run the actions bound to page load.
fn on_ready() {
    for binding in BINDINGS.iter().filter(|b| b.event == EventKind::Ready) {
        match binding.action {
            Action::InstallKeyframes => {
                if let Err(e) = dom::install_keyframes() {
                    gloo::console::error!("failed to install keyframes", e);
                }
            }
            other => gloo::console::warn!(format!("no ready handler for {other}")),
        }
    }
}

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    on_ready();

    // Mount the Yew app
    yew::Renderer::<app::App>::new().render();
}
