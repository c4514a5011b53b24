//! Launchpad REST API
//!
//! HTTP API layer, built with Axum.
//!
//! # Endpoints
//!
//! ## Shortcuts
//! - `GET /api/shortcuts` - List active shortcuts
//! - `POST /api/shortcuts` - Create a shortcut
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! Success responses wrap their payload as `{ "success": true, "data": … }`;
//! failures as `{ "success": false, "error": …, "message": … }`.
//!
//! # Example
//!
//! ```rust,ignore
//! use launchpad::api::{serve, ApiConfig, AppState};
//! use launchpad::store::{ShortcutStore, StoreConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(ShortcutStore::open(StoreConfig::default())?);
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(store, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/shortcuts", get(routes::shortcuts::list_shortcuts))
        .route("/shortcuts", post(routes::shortcuts::create_shortcut));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Launchpad API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Launchpad API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{ShortcutStore, StoreConfig};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    fn create_test_app() -> (Router, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let store = Arc::new(ShortcutStore::open(StoreConfig::new(dir.path())).unwrap());
        let api_config = ApiConfig::default();

        let state = AppState::new(store, api_config);
        let router = build_router(state);

        (router, dir)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_shortcut(json: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/shortcuts")
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap()
    }

    fn get_shortcuts() -> Request<Body> {
        Request::builder()
            .uri("/api/shortcuts")
            .body(Body::empty())
            .unwrap()
    }

    const TERMINAL: &str = r#"{
        "id": "terminal",
        "name": "Windows Terminal",
        "description": "Launch Windows Terminal",
        "icon": "💻",
        "uri": "andrejlauncher://terminal",
        "color": "bg-gray-700 hover:bg-gray-800",
        "order": 4
    }"#;

    #[tokio::test]
    async fn test_health_live() {
        let (app, _dir) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (app, _dir) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["shortcut_count"], 0);
    }

    #[tokio::test]
    async fn test_list_shortcuts_empty_envelope() {
        let (app, _dir) = create_test_app();

        let response = app.oneshot(get_shortcuts()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_create_shortcut_created_envelope() {
        let (app, _dir) = create_test_app();

        let response = app.oneshot(post_shortcut(TERMINAL)).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["id"], "terminal");
        assert_eq!(json["data"]["order"], 4);
        assert_eq!(json["data"]["isActive"], true);
        assert!(json["data"]["createdAt"].is_i64());
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let (app, _dir) = create_test_app();

        let response = app.clone().oneshot(post_shortcut(TERMINAL)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app.oneshot(get_shortcuts()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
        assert_eq!(json["data"][0]["name"], "Windows Terminal");
    }

    #[tokio::test]
    async fn test_duplicate_id_failure_envelope() {
        let (app, _dir) = create_test_app();

        let response = app.clone().oneshot(post_shortcut(TERMINAL)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app.clone().oneshot(post_shortcut(TERMINAL)).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Failed to create shortcut");
        assert!(json["message"]
            .as_str()
            .unwrap()
            .contains("already exists"));

        // Store unchanged
        let response = app.oneshot(get_shortcuts()).await.unwrap();
        let json = body_json(response).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_validation_failure_envelope() {
        let (app, _dir) = create_test_app();

        let blank_name = r#"{
            "id": "blank",
            "name": "   ",
            "description": "d",
            "icon": "i",
            "uri": "u",
            "color": "c"
        }"#;
        let response = app.oneshot(post_shortcut(blank_name)).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Failed to create shortcut");
    }

    #[tokio::test]
    async fn test_listing_excludes_inactive_over_http() {
        let (app, _dir) = create_test_app();

        let inactive = r#"{
            "id": "hidden",
            "name": "Hidden",
            "description": "d",
            "icon": "i",
            "uri": "u",
            "color": "c",
            "isActive": false
        }"#;
        let response = app.clone().oneshot(post_shortcut(inactive)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app.oneshot(get_shortcuts()).await.unwrap();
        let json = body_json(response).await;
        assert_eq!(json["data"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_listing_sorted_by_order() {
        let (app, _dir) = create_test_app();

        for (id, order) in [("third", 3), ("first", 1), ("second", 2)] {
            let body = format!(
                r#"{{"id":"{id}","name":"{id}","description":"d","icon":"i","uri":"u","color":"c","order":{order}}}"#
            );
            let response = app.clone().oneshot(post_shortcut(&body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = app.oneshot(get_shortcuts()).await.unwrap();
        let json = body_json(response).await;
        let ids: Vec<&str> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }
}
