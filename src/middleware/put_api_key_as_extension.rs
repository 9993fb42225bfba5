use axum::{extract::Request, middleware::Next, response::IntoResponse};

use crate::extractor::api_key::ApiKey;

/// Extracts the API key and puts it as an extension for the next layers.
///
/// Rejects with the [`ApiKey`] rejection before reaching the next layers.
/// Next layers can extract the key as [`Extension<UsedApiKey>`](axum::Extension), see
/// [`crate::route::api_key_protected::api_key_from_extension`].
pub async fn put_api_key_as_extension(
    ApiKey(used_api_key): ApiKey,
    mut req: Request,
    next: Next,
) -> impl IntoResponse {
    req.extensions_mut().insert(used_api_key);

    next.run(req).await
}
