pub mod method_not_allowed;
pub mod not_found;
pub mod put_api_key_as_extension;
pub mod trace_headers;
