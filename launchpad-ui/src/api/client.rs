//! HTTP API Client
//!
//! Functions for communicating with the Launchpad REST API, plus the
//! hardcoded fallback set the dashboard substitutes when live data is
//! unavailable. Retrieval never fails visibly: the accessor reports
//! failures as `Err`, and `resolve_shortcuts` turns them into the
//! fallback list plus a warning.

use gloo_net::http::Request;

use crate::state::global::Shortcut;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8085";

/// Get the API base URL from local storage or use the default.
///
/// Set the `launchpad_api_url` key in local storage to point the
/// dashboard at a different server.
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("launchpad_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Success envelope for the shortcut listing
#[derive(Debug, serde::Deserialize)]
struct ShortcutListEnvelope {
    success: bool,
    #[serde(default)]
    data: Option<Vec<Shortcut>>,
}

/// Fetch the active shortcuts.
///
/// Issues a no-cache GET and reports every failure mode (network error,
/// non-2xx status, malformed or unsuccessful envelope, absent data) as
/// `Err(reason)`. The caller decides whether to substitute the fallback
/// list; this function never panics or raises past its return value.
pub async fn fetch_shortcuts() -> Result<Vec<Shortcut>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/shortcuts", api_base))
        .header("Cache-Control", "no-cache")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: status {}", response.status()));
    }

    let envelope: ShortcutListEnvelope = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    match envelope.data {
        Some(data) if envelope.success => Ok(data),
        _ => Err("Invalid response format".to_string()),
    }
}

/// Fallback shortcuts in case the API is not available
pub fn fallback_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut {
            id: "calculator".to_string(),
            name: "Calculator".to_string(),
            description: "Launch Windows Calculator".to_string(),
            icon: "🧮".to_string(),
            uri: "andrejlauncher://calculator".to_string(),
            color: "bg-blue-500 hover:bg-blue-600".to_string(),
            order: 0,
            is_active: true,
        },
        Shortcut {
            id: "linkedin".to_string(),
            name: "LinkedIn".to_string(),
            description: "Open LinkedIn in browser".to_string(),
            icon: "💼".to_string(),
            uri: "https://www.linkedin.com/".to_string(),
            color: "bg-blue-600 hover:bg-blue-700".to_string(),
            order: 0,
            is_active: true,
        },
        Shortcut {
            id: "explorer".to_string(),
            name: "Windows Explorer".to_string(),
            description: "Open File Explorer".to_string(),
            icon: "📁".to_string(),
            uri: "andrejlauncher://explorer".to_string(),
            color: "bg-green-500 hover:bg-green-600".to_string(),
            order: 0,
            is_active: true,
        },
        Shortcut {
            id: "terminal".to_string(),
            name: "Windows Terminal".to_string(),
            description: "Launch Windows Terminal".to_string(),
            icon: "💻".to_string(),
            uri: "andrejlauncher://terminal".to_string(),
            color: "bg-gray-700 hover:bg-gray-800".to_string(),
            order: 0,
            is_active: true,
        },
    ]
}

/// Resolve a fetch outcome into what the grid renders.
///
/// `Ok` data passes through untouched; an `Err` yields the fallback list
/// together with the failure reason for the warning banner.
pub fn resolve_shortcuts(
    result: Result<Vec<Shortcut>, String>,
) -> (Vec<Shortcut>, Option<String>) {
    match result {
        Ok(shortcuts) => (shortcuts, None),
        Err(reason) => (fallback_shortcuts(), Some(reason)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_has_exactly_four_fixed_entries() {
        let fallback = fallback_shortcuts();
        assert_eq!(fallback.len(), 4);

        let ids: Vec<&str> = fallback.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["calculator", "linkedin", "explorer", "terminal"]);

        assert_eq!(fallback[0].uri, "andrejlauncher://calculator");
        assert_eq!(fallback[1].uri, "https://www.linkedin.com/");
        assert_eq!(fallback[3].name, "Windows Terminal");
    }

    #[test]
    fn test_resolve_passes_live_data_through() {
        let live = vec![fallback_shortcuts().remove(0)];
        let (shortcuts, warning) = resolve_shortcuts(Ok(live.clone()));
        assert_eq!(shortcuts, live);
        assert!(warning.is_none());
    }

    #[test]
    fn test_resolve_substitutes_fallback_on_error() {
        let (shortcuts, warning) = resolve_shortcuts(Err("Network error: refused".to_string()));
        assert_eq!(shortcuts, fallback_shortcuts());
        assert_eq!(warning.as_deref(), Some("Network error: refused"));
    }

    #[test]
    fn test_envelope_without_data_is_rejected_shape() {
        let envelope: ShortcutListEnvelope =
            serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(envelope.data.is_none());

        let envelope: ShortcutListEnvelope =
            serde_json::from_str(r#"{"success": false, "data": []}"#).unwrap();
        assert!(!envelope.success);
    }
}
