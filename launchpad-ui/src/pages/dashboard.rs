//! Dashboard Page
//!
//! The shortcut grid. Fetches the list on mount; whatever happens, the
//! page reaches a rendered state - live data when the API answers, the
//! fallback set (plus a warning banner) when it does not.

use leptos::*;

use crate::api;
use crate::components::{Loading, ShortcutTile, WarningBanner};
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Transient clicked-tile id, shared by every tile in the grid
    let clicked = create_rw_signal(None::<String>);

    // Fetch shortcuts on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            let result = api::fetch_shortcuts().await;

            if let Err(reason) = &result {
                web_sys::console::warn_1(
                    &format!("Failed to fetch shortcuts, using fallback: {}", reason).into(),
                );
            }

            let (shortcuts, warning) = api::resolve_shortcuts(result);
            state.shortcuts.set(shortcuts);
            state.fetch_warning.set(warning);
            state.loading.set(false);
        });
    });

    view! {
        <div class="space-y-12">
            // Welcome section
            <div class="text-center">
                <h2 class="text-4xl font-bold text-white mb-4">"Welcome to Your Dashboard"</h2>
                <p class="text-xl text-gray-300 max-w-2xl mx-auto">
                    "Click on any shortcut below to launch the corresponding application through its URI scheme."
                </p>
            </div>

            // Warning banner when live data was unavailable
            {move || {
                state.fetch_warning.get().map(|reason| view! {
                    <WarningBanner message=format!(
                        "Showing default shortcuts - live data unavailable ({})", reason
                    ) />
                })
            }}

            // Shortcuts grid
            {move || {
                if state.loading.get() {
                    view! { <Loading /> }.into_view()
                } else {
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                            {state.shortcuts.get().into_iter().map(|shortcut| view! {
                                <ShortcutTile shortcut=shortcut clicked=clicked />
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
            }}

            <HowItWorks />
        </div>
    }
}

/// Info section explaining the URI scheme handoff
#[component]
fn HowItWorks() -> impl IntoView {
    view! {
        <div class="mt-16 bg-white/5 backdrop-blur-md rounded-xl p-8 border border-white/10">
            <h3 class="text-2xl font-bold text-white mb-4">"How it works"</h3>
            <div class="grid md:grid-cols-2 gap-8">
                <div>
                    <h4 class="text-lg font-semibold text-blue-400 mb-2">
                        "andrejlauncher URI scheme"
                    </h4>
                    <p class="text-gray-300 mb-4">
                        "Shortcuts point at a custom \"andrejlauncher://\" URI scheme. \
                         Clicking a tile navigates to that URI and the handler registered \
                         with your operating system launches the application."
                    </p>
                    <div class="bg-gray-800 rounded-lg p-3 font-mono text-sm text-green-400">
                        "andrejlauncher://application-name"
                    </div>
                </div>
                <div>
                    <h4 class="text-lg font-semibold text-purple-400 mb-2">"Setup required"</h4>
                    <p class="text-gray-300 mb-4">
                        "The launcher script must be registered with your system before \
                         custom schemes resolve. Ordinary https links work without it."
                    </p>
                    <div class="bg-gray-800 rounded-lg p-3 font-mono text-sm text-yellow-400">
                        "python andrejlauncher.py"
                    </div>
                </div>
            </div>
        </div>
    }
}
