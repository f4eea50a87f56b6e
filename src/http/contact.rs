use crate::errors::store_error::StoreError;
use crate::models::contact::ContactSubmission;
use crate::{store, validation};
use axum::response::IntoResponse;
use axum::{Json, extract::State, http::StatusCode};
use log::{error, trace};
use serde_json::json;
use sqlx::{MySql, Pool};

pub(crate) async fn submit_contact(
    State(pool): State<Pool<MySql>>,
    Json(payload): Json<ContactSubmission>,
) -> impl IntoResponse {
    let violations = validation::validate(&payload);
    if !violations.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "message": "Validation failed",
                "errors": violations,
            })),
        ));
    }

    let contact = payload.normalized();
    match store::insert(&pool, &contact).await {
        Ok(contact_id) => {
            trace!("New contact submission: {} - {}", contact.email, contact.name);
            Ok((
                StatusCode::CREATED,
                Json(json!({
                    "success": true,
                    "message": "Thank you for your message! We will get back to you soon.",
                    "contactId": contact_id,
                })),
            ))
        }
        Err(StoreError::Conflict) => Err((
            StatusCode::CONFLICT,
            Json(json!({
                "success": false,
                "message": "A contact with this email already exists."
            })),
        )),
        Err(error) => {
            error!("Contact submission failed: {error}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "message": "Failed to submit contact form. Please try again."
                })),
            ))
        }
    }
}
