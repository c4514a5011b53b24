//! Core data types for the shortcut store
//!
//! - `Shortcut`: a persisted launch action as returned by reads
//! - `NewShortcut`: the write-side shape, before the store assigns timestamps
//! - `validate`: the explicit pre-write validation pass

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A persisted shortcut: a named, iconified launch action bound to a URI.
///
/// The JSON wire format is camelCase (`isActive`, `createdAt`, ...) and the
/// sort key is exposed as `order`, matching the documents the dashboard
/// consumes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Shortcut {
    /// Stable identifier, unique across all records. Not the database's
    /// internal row identity.
    pub id: String,
    /// Display name shown on the tile
    pub name: String,
    /// One-line description shown under the name
    pub description: String,
    /// Icon glyph (emoji)
    pub icon: String,
    /// Launch URI: a custom `scheme://token` handled by an OS-registered
    /// launcher, or an ordinary https URL
    pub uri: String,
    /// CSS utility classes painting the tile background
    pub color: String,
    /// Ascending sort key for listings
    #[serde(rename = "order")]
    pub sort_order: i64,
    /// Inactive shortcuts are excluded from listings
    pub is_active: bool,
    /// Set by the store on insert (ms since epoch)
    pub created_at: i64,
    /// Set by the store on insert and update (ms since epoch)
    pub updated_at: i64,
}

/// Write-side shape of a shortcut. Timestamps are assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewShortcut {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub uri: String,
    pub color: String,
    #[serde(rename = "order", default)]
    pub sort_order: i64,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl NewShortcut {
    /// Create a new shortcut with default ordering (0) and active flag (true)
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
        uri: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            icon: icon.into(),
            uri: uri.into(),
            color: color.into(),
            sort_order: 0,
            is_active: true,
        }
    }

    /// Builder method: set the sort key
    pub fn sort_order(mut self, sort_order: i64) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Builder method: set the active flag
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Return a copy with surrounding whitespace stripped from every
    /// string field. Runs before validation so that whitespace-only input
    /// is rejected as empty.
    pub fn normalized(&self) -> Self {
        Self {
            id: self.id.trim().to_string(),
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            icon: self.icon.trim().to_string(),
            uri: self.uri.trim().to_string(),
            color: self.color.trim().to_string(),
            sort_order: self.sort_order,
            is_active: self.is_active,
        }
    }
}

/// Reasons a write can be rejected before it reaches the database
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required string field is empty after trimming
    #[error("required field '{0}' is empty")]
    EmptyField(&'static str),
}

/// Validate a (normalized) shortcut before writing it.
///
/// Every display/action field is required; the numeric sort key and the
/// active flag always carry a value and need no checking.
pub fn validate(shortcut: &NewShortcut) -> Result<(), ValidationError> {
    let required: [(&'static str, &str); 6] = [
        ("id", &shortcut.id),
        ("name", &shortcut.name),
        ("description", &shortcut.description),
        ("icon", &shortcut.icon),
        ("uri", &shortcut.uri),
        ("color", &shortcut.color),
    ];

    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyField(field));
        }
    }

    Ok(())
}
