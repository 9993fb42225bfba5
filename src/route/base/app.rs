use axum::{routing::get, Router};

use crate::state::ApiState;

pub fn app() -> Router<ApiState> {
    Router::<ApiState>::new()
        .route("/", get(|| async { "Hello, World!" }))
        .route(
            "/extract_api_key_using_extractor",
            get(super::extract_api_key::extract_api_key_using_extractor),
        )
        .route(
            "/extract_api_key_using_optional_extractor",
            get(super::extract_api_key_optional::extract_api_key_using_optional_extractor),
        )
}
