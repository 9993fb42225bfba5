use axum::{
    http::{header::WWW_AUTHENTICATE, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use derive_more::From;
use serde::{Deserialize, Serialize};

use crate::auth::{AuthError, API_KEY_SCHEME};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ErrorVerbosity {
    /// Server returns an empty response with [`StatusCode::NO_CONTENT`] for all errors.
    None,
    /// Server returns only the appropriate status code.
    StatusCode,
    /// Server returns only the message with the appropriate status code.
    Message,
    /// Server returns the message, the error type with cleared error content and the appropriate status code.
    Type,
    /// Server returns the message, the error type with the error content and the appropriate status code.
    Full,
}

impl ErrorVerbosity {
    pub fn should_generate_message(&self) -> bool {
        matches!(
            self,
            ErrorVerbosity::Message | ErrorVerbosity::Type | ErrorVerbosity::Full
        )
    }

    pub fn should_generate_error_reason(&self) -> bool {
        matches!(self, ErrorVerbosity::Full)
    }
}

#[derive(Debug, Serialize)]
struct ApiErrorResponse {
    #[serde(flatten)]
    error: ApiError,
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct ApiErrorMessage {
    message: &'static str,
}

impl From<ApiErrorResponse> for ApiErrorMessage {
    fn from(response: ApiErrorResponse) -> Self {
        ApiErrorMessage {
            message: response.message,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        let headers = self.error.headers();
        let status_code = self.error.status_code();

        match self.error.verbosity() {
            ErrorVerbosity::None => StatusCode::NO_CONTENT.into_response(),
            ErrorVerbosity::StatusCode => (status_code, headers).into_response(),
            ErrorVerbosity::Message => {
                (status_code, headers, Json(ApiErrorMessage::from(self))).into_response()
            }
            ErrorVerbosity::Type | ErrorVerbosity::Full => {
                (status_code, headers, Json(self)).into_response()
            }
        }
    }
}

#[derive(Debug, From, Serialize)]
#[serde(tag = "error_type", content = "error")]
/// API error
pub enum ApiError {
    /// Method not allowed
    ///
    /// This error is returned when the method is not allowed.
    MethodNotAllowed(MethodNotAllowedError),
    /// Not found error
    ///
    /// This error is returned when the requested resource is not found.
    NotFound(NotFoundError),
    /// API key error
    ///
    /// This error is returned when the `Authorization` header does not carry an API key.
    ApiKey(ApiKeyError),
}

impl ApiError {
    fn verbosity(&self) -> ErrorVerbosity {
        match self {
            ApiError::MethodNotAllowed(err) => err.verbosity,
            ApiError::NotFound(err) => err.verbosity,
            ApiError::ApiKey(err) => err.verbosity,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ApiError::MethodNotAllowed(_) => "Method not allowed",
            ApiError::NotFound(_) => "The requested resource was not found",
            ApiError::ApiKey(_) => "API key error",
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed(err) => err.status_code(),
            ApiError::NotFound(err) => err.status_code(),
            ApiError::ApiKey(err) => err.status_code(),
        }
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        if let ApiError::ApiKey(_) = self {
            headers.insert(WWW_AUTHENTICATE, HeaderValue::from_static(API_KEY_SCHEME));
        }

        headers
    }
}

impl From<ApiError> for ApiErrorResponse {
    fn from(error: ApiError) -> Self {
        let message = match error.verbosity().should_generate_message() {
            true => error.message(),
            false => "",
        };

        ApiErrorResponse { error, message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        ApiErrorResponse::from(self).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct MethodNotAllowedError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
}

impl MethodNotAllowedError {
    pub fn new(verbosity: ErrorVerbosity) -> Self {
        MethodNotAllowedError { verbosity }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::METHOD_NOT_ALLOWED
    }
}

#[derive(Debug, Serialize)]
pub struct NotFoundError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
}

impl NotFoundError {
    pub fn new(verbosity: ErrorVerbosity) -> Self {
        NotFoundError { verbosity }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::NOT_FOUND
    }
}

#[derive(Debug, Serialize)]
pub struct ApiKeyError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
    api_key_error_type: AuthError,
    api_key_error_reason: Option<String>,
}

impl ApiKeyError {
    pub fn new(verbosity: ErrorVerbosity, api_key_error_type: AuthError) -> Self {
        let api_key_error_reason = verbosity
            .should_generate_error_reason()
            .then(|| api_key_error_type.to_string());

        ApiKeyError {
            verbosity,
            api_key_error_type,
            api_key_error_reason,
        }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;
    use serde_json::{json, Value};

    use super::*;

    async fn into_parts(error: ApiError) -> (StatusCode, HeaderMap, Vec<u8>) {
        let response = error.into_response();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Body is readable")
            .to_bytes();

        (status, headers, bytes.to_vec())
    }

    fn api_key_error(verbosity: ErrorVerbosity, err: AuthError) -> ApiError {
        ApiKeyError::new(verbosity, err).into()
    }

    #[tokio::test]
    async fn api_key_error_full() {
        let (status, headers, body) =
            into_parts(api_key_error(ErrorVerbosity::Full, AuthError::MalformedHeader)).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(headers[WWW_AUTHENTICATE], "ApiKey");

        let body: Value = serde_json::from_slice(&body).expect("Body is JSON");
        assert_eq!(
            body,
            json!({
                "error_type": "ApiKey",
                "error": {
                    "api_key_error_type": "MalformedHeader",
                    "api_key_error_reason": "malformed authorization header",
                },
                "message": "API key error",
            })
        );
    }

    #[tokio::test]
    async fn api_key_error_type_hides_reason() {
        let (status, _, body) =
            into_parts(api_key_error(ErrorVerbosity::Type, AuthError::NoAuthHeader)).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let body: Value = serde_json::from_slice(&body).expect("Body is JSON");
        assert_eq!(body["error"]["api_key_error_type"], "NoAuthHeader");
        assert_eq!(body["error"]["api_key_error_reason"], Value::Null);
    }

    #[tokio::test]
    async fn api_key_error_message_only() {
        let (_, _, body) =
            into_parts(api_key_error(ErrorVerbosity::Message, AuthError::NoAuthHeader)).await;

        let body: Value = serde_json::from_slice(&body).expect("Body is JSON");
        assert_eq!(body, json!({ "message": "API key error" }));
    }

    #[tokio::test]
    async fn api_key_error_status_code_only() {
        let (status, headers, body) =
            into_parts(api_key_error(ErrorVerbosity::StatusCode, AuthError::NoAuthHeader)).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(headers.contains_key(WWW_AUTHENTICATE));
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn no_verbosity_is_no_content() {
        let (status, _, body) =
            into_parts(api_key_error(ErrorVerbosity::None, AuthError::MalformedHeader)).await;

        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn not_found_has_no_authenticate_header() {
        let (status, headers, _) =
            into_parts(NotFoundError::new(ErrorVerbosity::Full).into()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(!headers.contains_key(WWW_AUTHENTICATE));
    }
}
