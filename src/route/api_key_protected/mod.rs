pub mod api_key_from_extension;
pub mod app;
