//! Warning Banner Component

use leptos::*;

/// Inline warning shown when the fetch failed and the grid is rendering
/// the fallback shortcut set.
#[component]
pub fn WarningBanner(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-3 bg-yellow-600/90 text-white px-4 py-3 rounded-lg shadow-lg max-w-2xl mx-auto">
            <span class="text-lg">"⚠"</span>
            <span class="text-sm font-medium">{message}</span>
        </div>
    }
}
