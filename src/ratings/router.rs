use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{RatingSubmission, ShipId};
use super::service::{RatingService, SubmissionError};
use super::store::ShipStore;

/// Router builder exposing the rating facade over HTTP.
pub fn rating_router<S>(service: Arc<RatingService<S>>) -> Router
where
    S: ShipStore + 'static,
{
    Router::new()
        .route("/api/v1/ratings", post(submit_handler::<S>))
        .route("/api/v1/ships/:ship_id", get(ship_summary_handler::<S>))
        .with_state(service)
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<RatingService<S>>>,
    axum::Json(submission): axum::Json<RatingSubmission>,
) -> Response
where
    S: ShipStore + 'static,
{
    match service.submit(submission).await {
        Ok(receipt) => (StatusCode::CREATED, axum::Json(receipt)).into_response(),
        Err(err @ SubmissionError::Unauthenticated) => {
            error_response(StatusCode::UNAUTHORIZED, &err)
        }
        Err(err @ SubmissionError::InvalidArgument) => {
            error_response(StatusCode::UNPROCESSABLE_ENTITY, &err)
        }
        Err(err @ SubmissionError::Store(_)) => {
            error_response(StatusCode::SERVICE_UNAVAILABLE, &err)
        }
        Err(other) => error_response(StatusCode::INTERNAL_SERVER_ERROR, &other),
    }
}

pub(crate) async fn ship_summary_handler<S>(
    State(service): State<Arc<RatingService<S>>>,
    Path(ship_id): Path<String>,
) -> Response
where
    S: ShipStore + 'static,
{
    let id = ShipId(ship_id);
    match service.ship_summary(&id).await {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(err @ SubmissionError::ShipNotFound) => error_response(StatusCode::NOT_FOUND, &err),
        Err(err @ SubmissionError::Store(_)) => {
            error_response(StatusCode::SERVICE_UNAVAILABLE, &err)
        }
        Err(other) => error_response(StatusCode::INTERNAL_SERVER_ERROR, &other),
    }
}

fn error_response(status: StatusCode, err: &SubmissionError) -> Response {
    let payload = json!({ "error": err.to_string() });
    (status, axum::Json(payload)).into_response()
}
