use crate::store;
use axum::response::IntoResponse;
use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use log::error;
use serde_json::json;
use sqlx::{MySql, Pool};

pub(crate) async fn health(State(pool): State<Pool<MySql>>) -> impl IntoResponse {
    match store::ping(&pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "Server and database are healthy",
                "timestamp": Utc::now().to_rfc3339(),
            })),
        ),
        Err(error) => {
            error!("Health check failed: {error}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "message": "Database connection failed"
                })),
            )
        }
    }
}
