//! Shortcuts Routes
//!
//! The two operations exposed over HTTP:
//!
//! - GET /api/shortcuts - List active shortcuts
//! - POST /api/shortcuts - Create a shortcut
//!
//! Update, delete and reorder are deliberately not exposed; management
//! beyond create+list goes through the CLI against the store directly.

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::{ShortcutEnvelope, ShortcutListEnvelope};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::store::NewShortcut;

/// GET /api/shortcuts
///
/// All active shortcuts, sorted by `order` ascending with ties broken by
/// creation time.
pub async fn list_shortcuts(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ShortcutListEnvelope>> {
    let shortcuts = state.store.list_active().await.map_err(ApiError::Fetch)?;

    tracing::debug!(count = shortcuts.len(), "Listed active shortcuts");

    Ok(Json(ShortcutListEnvelope::new(shortcuts)))
}

/// POST /api/shortcuts
///
/// Create a new shortcut from a JSON body. `order` defaults to 0 and
/// `isActive` to true when absent.
pub async fn create_shortcut(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewShortcut>,
) -> ApiResult<(StatusCode, Json<ShortcutEnvelope>)> {
    let shortcut = state.store.insert(req).await.map_err(ApiError::Create)?;

    tracing::info!(id = %shortcut.id, name = %shortcut.name, "Created shortcut");

    Ok((StatusCode::CREATED, Json(ShortcutEnvelope::new(shortcut))))
}
