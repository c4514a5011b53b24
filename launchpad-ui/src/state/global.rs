//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;
use serde::{Deserialize, Serialize};

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Shortcuts the grid renders: live data or the fallback set
    pub shortcuts: RwSignal<Vec<Shortcut>>,
    /// True until the initial fetch settles, success or failure
    pub loading: RwSignal<bool>,
    /// Set when the fetch failed and fallback data was substituted
    pub fetch_warning: RwSignal<Option<String>>,
}

/// A shortcut as rendered by the dashboard.
///
/// Matches the API's camelCase wire format; `order` and `isActive` are
/// optional so the hardcoded fallback entries (display fields only)
/// deserialize the same way as live records.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Shortcut {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub uri: String,
    pub color: String,
    #[serde(rename = "order", default)]
    pub order: i64,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        shortcuts: create_rw_signal(Vec::new()),
        loading: create_rw_signal(true),
        fetch_warning: create_rw_signal(None),
    };

    provide_context(state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_deserializes_wire_format() {
        // As served by the API, including store-managed fields the UI ignores
        let json = r#"{
            "id": "calculator",
            "name": "Calculator",
            "description": "Launch Windows Calculator",
            "icon": "🧮",
            "uri": "andrejlauncher://calculator",
            "color": "bg-blue-500 hover:bg-blue-600",
            "order": 1,
            "isActive": true,
            "createdAt": 1720000000000,
            "updatedAt": 1720000000000
        }"#;

        let shortcut: Shortcut = serde_json::from_str(json).unwrap();
        assert_eq!(shortcut.id, "calculator");
        assert_eq!(shortcut.order, 1);
        assert!(shortcut.is_active);
    }

    #[test]
    fn test_shortcut_defaults_for_display_only_entries() {
        let json = r#"{
            "id": "linkedin",
            "name": "LinkedIn",
            "description": "Open LinkedIn in browser",
            "icon": "💼",
            "uri": "https://www.linkedin.com/",
            "color": "bg-blue-600 hover:bg-blue-700"
        }"#;

        let shortcut: Shortcut = serde_json::from_str(json).unwrap();
        assert_eq!(shortcut.order, 0);
        assert!(shortcut.is_active);
    }
}
