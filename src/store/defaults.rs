//! Default shortcut set
//!
//! The fixed list used by the seed command. The dashboard ships the same
//! four entries as its client-side fallback, so a freshly seeded store and
//! an unreachable store render identically.

use crate::store::types::NewShortcut;

/// The four default shortcuts, in display order.
pub fn default_shortcuts() -> Vec<NewShortcut> {
    vec![
        NewShortcut::new(
            "calculator",
            "Calculator",
            "Launch Windows Calculator",
            "🧮",
            "andrejlauncher://calculator",
            "bg-blue-500 hover:bg-blue-600",
        )
        .sort_order(1),
        NewShortcut::new(
            "linkedin",
            "LinkedIn",
            "Open LinkedIn in browser",
            "💼",
            "https://www.linkedin.com/",
            "bg-blue-600 hover:bg-blue-700",
        )
        .sort_order(2),
        NewShortcut::new(
            "explorer",
            "Windows Explorer",
            "Open File Explorer",
            "📁",
            "andrejlauncher://explorer",
            "bg-green-500 hover:bg-green-600",
        )
        .sort_order(3),
        NewShortcut::new(
            "terminal",
            "Windows Terminal",
            "Launch Windows Terminal",
            "💻",
            "andrejlauncher://terminal",
            "bg-gray-700 hover:bg-gray-800",
        )
        .sort_order(4),
    ]
}
