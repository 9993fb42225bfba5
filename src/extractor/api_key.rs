use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::{
    auth,
    error::{ApiError, ApiKeyError},
    traits::StateProvider,
    types::used_api_key::UsedApiKey,
};

/// Extracts the API key from the `Authorization: ApiKey <key>` request header.
///
/// The key is not validated against any known keys.
#[derive(Debug, Clone)]
pub struct ApiKey(pub UsedApiKey);

#[async_trait]
impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync + StateProvider,
{
    type Rejection = ApiError;

    #[tracing::instrument(name = "api_key_extractor", skip_all)]
    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let verbosity = state.error_verbosity();

        let used_api_key = auth::get_api_key(&parts.headers).map_err(|err| {
            tracing::warn!(%err, "Rejection");

            ApiKeyError::new(verbosity, err)
        })?;

        tracing::trace!(?used_api_key, "Extracted");

        Ok(ApiKey(used_api_key))
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        http::{header::AUTHORIZATION, Request, StatusCode},
        response::IntoResponse,
    };

    use super::*;
    use crate::{error::ErrorVerbosity, extractor::optional::Optional, state::ApiState};

    fn parts(authorization: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/");

        if let Some(authorization) = authorization {
            builder = builder.header(AUTHORIZATION, authorization);
        }

        builder.body(()).expect("Valid request").into_parts().0
    }

    async fn extract(authorization: Option<&str>) -> Result<ApiKey, ApiError> {
        let state = ApiState::new(ErrorVerbosity::Full);

        ApiKey::from_request_parts(&mut parts(authorization), &state).await
    }

    #[tokio::test]
    async fn extracts_key() {
        let ApiKey(used_api_key) = extract(Some("ApiKey abc123")).await.expect("Key extracted");

        assert_eq!(used_api_key.value, "abc123");
    }

    #[tokio::test]
    async fn rejects_missing_header_with_unauthorized() {
        let rejection = extract(None).await.expect_err("Missing header rejected");

        assert!(matches!(rejection, ApiError::ApiKey(_)));
        assert_eq!(rejection.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn rejects_bearer_with_unauthorized() {
        let rejection = extract(Some("Bearer abc123"))
            .await
            .expect_err("Bearer rejected");

        assert_eq!(rejection.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn optional_does_not_reject() {
        let state = ApiState::new(ErrorVerbosity::Full);

        let Optional(none) =
            Optional::<ApiKey>::from_request_parts(&mut parts(Some("apikey abc123")), &state)
                .await
                .unwrap();
        assert!(none.is_none());

        let Optional(some) =
            Optional::<ApiKey>::from_request_parts(&mut parts(Some("ApiKey abc123")), &state)
                .await
                .unwrap();
        assert_eq!(some.map(|ApiKey(key)| key.value), Some("abc123".to_string()));
    }
}
