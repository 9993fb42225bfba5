use axum::{extract::Request, http::Response, middleware::Next, response::IntoResponse};

/// Middlware to trace headers.
///
/// The `Authorization` header carries the API key, so its value is never traced.
pub async fn trace_headers(req: Request, next: Next) -> impl IntoResponse {
    let incoming_headers = req
        .headers()
        .iter()
        .map(|(name, value)| match *name == axum::http::header::AUTHORIZATION {
            true => (name.as_str(), "..."),
            false => (name.as_str(), value.to_str().unwrap_or("<opaque>")),
        })
        .collect::<Vec<_>>();
    tracing::trace!(?incoming_headers, "Headers");

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    let outgoing_headers = &parts.headers;
    tracing::trace!(?outgoing_headers, "Headers");

    Response::from_parts(parts, body)
}
