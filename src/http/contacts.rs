use crate::models::contact::ContactStatus;
use crate::store::{self, ListFilter};
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::{Json, http::StatusCode};
use log::error;
use serde::Deserialize;
use serde_json::json;
use sqlx::{MySql, Pool};

#[derive(Deserialize)]
pub(crate) struct ListParams {
    status: Option<String>,
    limit: Option<u32>,
    offset: Option<u32>,
}

pub(crate) async fn list_contacts(
    State(pool): State<Pool<MySql>>,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    let status = match params.status.as_deref() {
        Some(value) => match ContactStatus::parse(value) {
            Some(status) => Some(status),
            None => {
                return Err((
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "success": false,
                        "message": "Invalid status. Must be: new, read, or responded"
                    })),
                ));
            }
        },
        None => None,
    };

    let filter = ListFilter {
        status,
        limit: params.limit,
        offset: params.offset,
    };

    let contacts = match store::list(&pool, &filter).await {
        Ok(contacts) => contacts,
        Err(error) => {
            error!("Failed to fetch contacts: {error}");
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "message": "Failed to fetch contacts"
                })),
            ));
        }
    };

    let total = match store::count(&pool).await {
        Ok(total) => total,
        Err(error) => {
            error!("Failed to count contacts: {error}");
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "message": "Failed to fetch contacts"
                })),
            ));
        }
    };

    Ok(Json(json!({
        "success": true,
        "contacts": contacts,
        "total": total,
    })))
}
