//! Middleware for logging requests and responses.

use axum::{
    body::{Body, Bytes, to_bytes},
    extract::{FromRequest, Request},
    http::{StatusCode, request, response},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::Error;

/// The number of characters of a body to log at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] characters, it is
/// truncated and the full body is logged at the `debug` level.
///
/// Request bodies are buffered up to axum's default body limit (2 MiB).
/// Larger bodies are rejected with [Error::RequestBodyTooLarge] before they
/// reach a handler.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body_text = match read_request_body(body).await {
        Ok(text) => text,
        Err(error) => return error.into_response(),
    };
    log_request(&parts, &body_text);

    let request = Request::from_parts(parts, body_text.into());
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let body_text = match body_to_text(body).await {
        Ok(text) => text,
        Err(error) => {
            tracing::error!("could not read response body: {error}");
            return Response::from_parts(parts, Body::empty());
        }
    };
    log_response(&parts, &body_text);

    Response::from_parts(parts, body_text.into())
}

async fn read_request_body(body: Body) -> Result<String, Error> {
    // A bare request carries no `DefaultBodyLimit` extension, so the
    // extractor falls back to axum's default limit.
    let body_bytes = Bytes::from_request(Request::new(body), &())
        .await
        .map_err(|rejection| {
            tracing::warn!("could not read request body: {}", rejection.body_text());

            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                Error::RequestBodyTooLarge
            } else {
                Error::InvalidJson("could not read request body".to_owned())
            }
        })?;

    Ok(String::from_utf8_lossy(&body_bytes).to_string())
}

async fn body_to_text(body: Body) -> Result<String, axum::Error> {
    let body_bytes = to_bytes(body, usize::MAX).await?;

    Ok(String::from_utf8_lossy(&body_bytes).to_string())
}

/// Get the first [LOG_BODY_LENGTH_LIMIT] characters of `body`, or `None` if
/// the body is short enough to be logged in full.
fn truncate(body: &str) -> Option<&str> {
    body.char_indices()
        .nth(LOG_BODY_LENGTH_LIMIT)
        .map(|(end, _)| &body[..end])
}

fn log_request(parts: &request::Parts, body: &str) {
    match truncate(body) {
        Some(truncated) => {
            tracing::info!(
                "Received request: {} {}\nbody: {truncated}...",
                parts.method,
                parts.uri
            );
            tracing::debug!("Full request body: {body:?}");
        }
        None => tracing::info!(
            "Received request: {} {}\nbody: {body:?}",
            parts.method,
            parts.uri
        ),
    }
}

fn log_response(parts: &response::Parts, body: &str) {
    match truncate(body) {
        Some(truncated) => {
            tracing::info!("Sending response: {}\nbody: {truncated}...", parts.status);
            tracing::debug!("Full response body: {body:?}");
        }
        None => tracing::info!("Sending response: {}\nbody: {body:?}", parts.status),
    }
}

#[cfg(test)]
mod logging_tests {
    use axum::{Json, Router, http::StatusCode, middleware, routing::post};
    use axum_test::TestServer;
    use serde_json::{Value, json};

    use super::{LOG_BODY_LENGTH_LIMIT, logging_middleware, truncate};

    #[test]
    fn short_body_is_not_truncated() {
        assert_eq!(truncate("{\"name\":\"Books\"}"), None);
    }

    #[test]
    fn long_body_is_truncated_on_char_boundary() {
        let body = "é".repeat(LOG_BODY_LENGTH_LIMIT + 10);

        let truncated = truncate(&body).expect("body should be truncated");

        assert_eq!(truncated.chars().count(), LOG_BODY_LENGTH_LIMIT);
    }

    async fn echo(Json(body): Json<Value>) -> Json<Value> {
        Json(body)
    }

    fn get_echo_server() -> TestServer {
        let app = Router::new()
            .route("/echo", post(echo))
            .layer(middleware::from_fn(logging_middleware));

        TestServer::try_new(app).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn middleware_passes_bodies_through() {
        let server = get_echo_server();
        let body = json!({"description": "x".repeat(LOG_BODY_LENGTH_LIMIT * 2)});

        let response = server.post("/echo").json(&body).await;

        response.assert_status_ok();
        response.assert_json(&body);
    }

    #[tokio::test]
    async fn oversized_request_body_is_rejected() {
        // axum's default body limit.
        let limit = 2 * 1024 * 1024;
        let server = get_echo_server();
        let body = json!({"description": "x".repeat(limit)});

        let response = server.post("/echo").json(&body).await;

        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
        response.assert_json(&json!({"error": "request body is too large"}));
    }
}
