use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use super::common::{build_service, submission};
use crate::ratings::router::rating_router;

fn post_rating(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/ratings")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .expect("request")
}

#[tokio::test]
async fn post_rating_returns_receipt() {
    let (service, _store) = build_service();
    let router = rating_router(Arc::new(service));

    let body = serde_json::to_vec(&submission()).expect("serialize submission");
    let response = router.oneshot(post_rating(body)).await.expect("dispatch");

    assert_eq!(response.status(), StatusCode::CREATED);
    let bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    let payload: Value = serde_json::from_slice(&bytes).expect("json");
    assert!(payload.get("ship_id").is_some());
    assert!(payload.get("rating_id").is_some());
    assert_eq!(
        payload
            .get("averages")
            .and_then(|averages| averages.get("food"))
            .and_then(Value::as_str),
        Some("4.0")
    );
}

#[tokio::test]
async fn anonymous_post_maps_to_unauthorized() {
    let (service, store) = build_service();
    let router = rating_router(Arc::new(service));

    let mut anonymous = submission();
    anonymous.evaluator_id = None;
    let body = serde_json::to_vec(&anonymous).expect("serialize submission");
    let response = router.oneshot(post_rating(body)).await.expect("dispatch");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(store.ship_count(), 0);
}
