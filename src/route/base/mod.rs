pub mod app;
pub mod extract_api_key;
pub mod extract_api_key_optional;
