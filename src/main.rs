//! Parlor
//!
//! A Discord-style chat interface built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Everything it shows comes from a mock server directory built
//! once at startup; there is no backend, no persistence and no network I/O.
//! Route changes re-derive the active server and channel, and the views
//! re-render from the resolved records.

use leptos::*;

mod app;
mod components;
mod data;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
