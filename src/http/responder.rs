//! The fixed-latency responder.
//!
//! Every request, whatever its method, path, headers or body, waits out the
//! configured delay and then gets the same status and the same body. No
//! `content-type` is set.

use std::sync::Arc;

use axum::{body::Body, extract::State, response::Response};

use crate::config::FixedResponse;

/// Handle one request.
///
/// The delay is a plain `sleep` on this request's task. Nothing cancels it; if
/// the client goes away the runtime drops the future.
pub async fn respond(State(fixed): State<Arc<FixedResponse>>) -> Response {
    tokio::time::sleep(fixed.delay).await;

    let mut response = Response::new(Body::from(fixed.body.clone()));
    *response.status_mut() = fixed.status;
    response
}
