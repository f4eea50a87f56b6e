use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use orrya_contact_service::http::router;
use serde_json::{Value, json};
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use tower::ServiceExt;

// A lazy pool never opens a connection until a statement runs, so every
// request asserted here must be rejected before it reaches the store.
fn app() -> Router {
    let options = MySqlConnectOptions::new()
        .host("localhost")
        .username("root")
        .database("orrya_contacts_test");

    router(MySqlPoolOptions::new().connect_lazy_with(options))
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_contact(payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

#[tokio::test]
async fn unmatched_route_returns_404() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Endpoint not found"));
}

#[tokio::test]
async fn short_name_is_rejected_with_a_name_error() {
    let response = app()
        .oneshot(post_contact(json!({
            "name": "A",
            "email": "alice@example.com",
            "message": "Hello there, this is a test."
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Validation failed"));
    assert_eq!(
        body["errors"],
        json!(["Name must be at least 2 characters long"])
    );
}

#[tokio::test]
async fn invalid_email_is_rejected() {
    let response = app()
        .oneshot(post_contact(json!({
            "name": "Alice",
            "email": "not-an-email",
            "message": "Hello there, this is a test."
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["errors"], json!(["Please provide a valid email address"]));
}

#[tokio::test]
async fn empty_submission_reports_every_violation() {
    let response = app().oneshot(post_contact(json!({}))).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 3);
}

#[tokio::test]
async fn implausible_phone_is_rejected() {
    let response = app()
        .oneshot(post_contact(json!({
            "name": "Alice",
            "email": "alice@example.com",
            "phone": "not-a-phone",
            "message": "Hello there, this is a test."
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["errors"], json!(["Please provide a valid phone number"]));
}

#[tokio::test]
async fn unknown_status_is_rejected_regardless_of_id() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri("/api/contacts/1/status")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "status": "archived" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(
        body["message"],
        json!("Invalid status. Must be: new, read, or responded")
    );
}

#[tokio::test]
async fn missing_status_is_rejected() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri("/api/contacts/1/status")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn listing_with_unknown_status_filter_is_rejected() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/contacts?status=bogus")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(
        body["message"],
        json!("Invalid status. Must be: new, read, or responded")
    );
}
