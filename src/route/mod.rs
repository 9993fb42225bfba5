pub mod api_key_protected;
pub mod base;
