//! Shortcut Tile Component
//!
//! One clickable tile in the dashboard grid. Clicking navigates to the
//! shortcut's URI through a temporary anchor element and lights a
//! transient indicator.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::state::global::Shortcut;

/// Milliseconds the click indicator stays lit after a launch
const CLICK_FLASH_MS: u32 = 1000;

/// A single shortcut tile
#[component]
pub fn ShortcutTile(
    shortcut: Shortcut,
    /// Id of the most recently clicked tile, shared across the grid
    clicked: RwSignal<Option<String>>,
) -> impl IntoView {
    let id = shortcut.id.clone();
    let id_for_class = shortcut.id.clone();
    let id_for_indicator = shortcut.id.clone();
    let uri = shortcut.uri.clone();

    let on_click = move |_| {
        clicked.set(Some(id.clone()));
        launch_uri(&uri);

        // Flash indicator, not a persisted selection: clear after a fixed delay
        gloo_timers::callback::Timeout::new(CLICK_FLASH_MS, move || {
            clicked.set(None);
        })
        .forget();
    };

    view! {
        <div
            class=move || {
                let ring = if clicked.get().as_deref() == Some(id_for_class.as_str()) {
                    "ring-4 ring-yellow-400 ring-opacity-50"
                } else {
                    "hover:ring-2 hover:ring-white/20"
                };
                format!(
                    "group relative overflow-hidden rounded-xl p-6 cursor-pointer \
                     transition-all duration-300 transform hover:scale-105 hover:shadow-2xl {}",
                    ring
                )
            }
            on:click=on_click
        >
            // Background color wash
            <div class=format!(
                "absolute inset-0 {} opacity-90 group-hover:opacity-100 transition-opacity duration-300",
                shortcut.color
            ) />

            // Content
            <div class="relative z-10">
                <div class="text-4xl mb-4">{shortcut.icon.clone()}</div>
                <h3 class="text-xl font-bold text-white mb-2">{shortcut.name.clone()}</h3>
                <p class="text-white/80 text-sm">{shortcut.description.clone()}</p>

                // Click indicator
                {move || {
                    (clicked.get().as_deref() == Some(id_for_indicator.as_str())).then(|| view! {
                        <div class="absolute top-2 right-2">
                            <div class="w-3 h-3 bg-yellow-400 rounded-full animate-pulse" />
                        </div>
                    })
                }}
            </div>

            // Hover effect overlay
            <div class="absolute inset-0 bg-white/10 opacity-0 group-hover:opacity-100 transition-opacity duration-300" />
        </div>
    }
}

/// Navigate to a shortcut URI through a temporary anchor element, so
/// custom schemes are handed to the OS-registered launcher without
/// replacing the dashboard page.
fn launch_uri(uri: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(element) = document.create_element("a") else {
        return;
    };
    let Ok(link) = element.dyn_into::<web_sys::HtmlAnchorElement>() else {
        return;
    };

    link.set_href(uri);

    if let Some(body) = document.body() {
        let _ = body.append_child(&link);
        link.click();
        let _ = body.remove_child(&link);
    }
}
