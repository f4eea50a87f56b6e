use crate::config::Config;
use axum::http::HeaderValue;
use axum::response::IntoResponse;
use axum::routing::{get, patch, post};
use axum::{Json, Router, http::StatusCode};
use log::info;
use serde_json::json;
use sqlx::{MySql, Pool};
use tower_http::cors::{Any, CorsLayer};

mod contact;
mod contact_status;
mod contacts;
mod health;
mod stats;

/// Builds the API router. Kept separate from [`listen`] so tests can drive
/// it in-process.
pub fn router(pool: Pool<MySql>) -> Router {
    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/contact", post(contact::submit_contact))
        .route("/api/contacts", get(contacts::list_contacts))
        .route(
            "/api/contacts/{id}/status",
            patch(contact_status::update_contact_status),
        )
        .route("/api/stats", get(stats::stats))
        .fallback(not_found)
        .with_state(pool)
}

/// Starts the HTTP server with the cross-origin policy from the
/// configuration.
pub async fn listen(pool: Pool<MySql>, config: &Config) {
    let cors = match config.frontend_url.as_deref() {
        Some(frontend_url) => CorsLayer::new()
            .allow_origin(
                frontend_url
                    .parse::<HeaderValue>()
                    .expect("Could not convert FRONTEND_URL to header"),
            )
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::permissive(),
    };

    let app = router(pool).layer(cors);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.listen_port))
        .await
        .expect("Could not bind HTTP server");

    info!("HTTP server listening on port {}", config.listen_port);

    axum::serve(listener, app)
        .await
        .expect("HTTP server failed");
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "message": "Endpoint not found"
        })),
    )
}
