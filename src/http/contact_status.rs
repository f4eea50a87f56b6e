use crate::errors::store_error::StoreError;
use crate::models::contact::ContactStatus;
use crate::store;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::{Json, http::StatusCode};
use log::{error, trace};
use serde::Deserialize;
use serde_json::json;
use sqlx::{MySql, Pool};

#[derive(Deserialize)]
pub(crate) struct UpdateStatus {
    status: Option<String>,
}

pub(crate) async fn update_contact_status(
    State(pool): State<Pool<MySql>>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStatus>,
) -> impl IntoResponse {
    // Reject anything outside the enumeration before touching storage,
    // regardless of whether the id exists.
    let Some(status) = payload.status.as_deref().and_then(ContactStatus::parse) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "message": "Invalid status. Must be: new, read, or responded"
            })),
        ));
    };

    match store::update_status(&pool, id, status).await {
        Ok(()) => {
            trace!("Contact {id} marked {}", status.as_str());
            Ok(Json(json!({
                "success": true,
                "message": "Contact status updated successfully"
            })))
        }
        Err(StoreError::NotFound) => Err((
            StatusCode::NOT_FOUND,
            Json(json!({
                "success": false,
                "message": "Contact not found"
            })),
        )),
        Err(error) => {
            error!("Failed to update contact status: {error}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "message": "Failed to update contact status"
                })),
            ))
        }
    }
}
