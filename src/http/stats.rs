use crate::models::contact::ContactStatus;
use crate::store;
use axum::response::IntoResponse;
use axum::{Json, extract::State, http::StatusCode};
use log::error;
use serde_json::json;
use sqlx::{MySql, Pool};

/// Submission totals, overall and per workflow status.
pub(crate) async fn stats(State(pool): State<Pool<MySql>>) -> impl IntoResponse {
    let total = match store::count(&pool).await {
        Ok(total) => total,
        Err(error) => {
            error!("Failed to fetch stats: {error}");
            return Err(stats_unavailable());
        }
    };

    let counts = match store::status_counts(&pool).await {
        Ok(counts) => counts,
        Err(error) => {
            error!("Failed to fetch stats: {error}");
            return Err(stats_unavailable());
        }
    };

    let count_for = |status: ContactStatus| {
        counts
            .iter()
            .find(|(row_status, _)| *row_status == status)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    };

    Ok(Json(json!({
        "success": true,
        "stats": {
            "total": total,
            "new": count_for(ContactStatus::New),
            "read": count_for(ContactStatus::Read),
            "responded": count_for(ContactStatus::Responded),
        },
    })))
}

fn stats_unavailable() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "success": false,
            "message": "Failed to fetch stats"
        })),
    )
}
