//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod banner;
pub mod loading;
pub mod shortcut_tile;

pub use banner::WarningBanner;
pub use loading::Loading;
pub use shortcut_tile::ShortcutTile;
