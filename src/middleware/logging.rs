/**
 * Request Logging Middleware
 *
 * Structured per-request logging: every request gets a fresh request id,
 * and a single `request_processed` event records method, path, status,
 * and elapsed time once the response is ready. Authorization header
 * presence is logged at debug level (never its contents).
 */

use axum::{
    extract::Request,
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use uuid::Uuid;

/// Log one structured event per request
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let has_auth_header = request.headers().contains_key(AUTHORIZATION);
    let start = Instant::now();

    tracing::debug!(%request_id, %method, path, auth_header = has_auth_header, "request_received");

    let response = next.run(request).await;

    tracing::info!(
        %request_id,
        %method,
        path,
        status = response.status().as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "request_processed"
    );

    response
}
