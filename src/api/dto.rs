//! Data Transfer Objects
//!
//! Envelope and response types serialized to/from JSON. Listing and
//! creation share the same success shape `{ success: true, data }`;
//! failures share `{ success: false, error, message }`.

use serde::{Deserialize, Serialize};

use crate::store::Shortcut;

/// Success envelope for `GET /api/shortcuts`
#[derive(Debug, Serialize, Deserialize)]
pub struct ShortcutListEnvelope {
    pub success: bool,
    pub data: Vec<Shortcut>,
}

impl ShortcutListEnvelope {
    pub fn new(data: Vec<Shortcut>) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Success envelope for `POST /api/shortcuts`
#[derive(Debug, Serialize, Deserialize)]
pub struct ShortcutEnvelope {
    pub success: bool,
    pub data: Shortcut,
}

impl ShortcutEnvelope {
    pub fn new(data: Shortcut) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Failure envelope shared by both operations
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
    pub message: String,
}

/// Full health status response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub store: String,
    pub uptime_seconds: u64,
    pub shortcut_count: usize,
    pub version: String,
}
