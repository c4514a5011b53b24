//! Launchpad Dashboard
//!
//! Launcher dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Grid of clickable shortcut tiles
//! - Custom URI scheme handoff to an OS-registered launcher
//! - Fallback shortcut set when the API is unreachable
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles
//! to WebAssembly. It fetches shortcut data from the Launchpad API over
//! HTTP; when that fails for any reason, it renders a fixed default set
//! instead of an error page.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
