use axum::{extract::State, http::Uri};

use crate::{
    error::{ApiError, NotFoundError},
    state::ApiState,
    traits::StateProvider,
};

/// Fallback for requests that match no route.
pub async fn not_found(State(state): State<ApiState>, uri: Uri) -> ApiError {
    tracing::debug!(%uri, "Rejection. No route");

    NotFoundError::new(state.error_verbosity()).into()
}
