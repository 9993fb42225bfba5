use axum::{middleware::from_fn_with_state, routing::get, Router};

use crate::{middleware::put_api_key_as_extension::put_api_key_as_extension, state::ApiState};

pub fn app(state: ApiState) -> Router<ApiState> {
    Router::<ApiState>::new()
        .route("/", get(|| async { "API Key Protected" }))
        .route(
            "/api_key_from_extension",
            get(super::api_key_from_extension::api_key_from_extension),
        )
        .layer(from_fn_with_state(state, put_api_key_as_extension))
}
