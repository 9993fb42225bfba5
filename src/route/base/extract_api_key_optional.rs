use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::extractor::{api_key::ApiKey, optional::Optional};

#[derive(Debug, Serialize)]
pub struct OptionalExtractApiKeyResponse {
    used_api_key: Option<String>,
}

impl IntoResponse for OptionalExtractApiKeyResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Extracts the API key from the request using the [`Optional`] extractor.
///
/// The API key is optional, so this function will not reject if the API key is missing or malformed.
pub async fn extract_api_key_using_optional_extractor(
    Optional(opt_api_key): Optional<ApiKey>,
) -> OptionalExtractApiKeyResponse {
    OptionalExtractApiKeyResponse {
        used_api_key: opt_api_key.map(|ApiKey(key)| key.value),
    }
}
