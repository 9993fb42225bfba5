use std::convert::Infallible;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

/// Runs the extractor `X` and turns its rejection into [`None`].
///
/// Handlers using it serve anonymous callers too, e.g. a request without an `Authorization` header.
#[derive(Debug, Clone)]
pub struct Optional<X>(pub Option<X>);

#[async_trait]
impl<X, S> FromRequestParts<S> for Optional<X>
where
    X: FromRequestParts<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    #[tracing::instrument(name = "optional_extractor", skip_all)]
    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let extracted = X::from_request_parts(parts, state).await.ok();

        tracing::trace!(present = extracted.is_some(), "Extracted");

        Ok(Optional(extracted))
    }
}
