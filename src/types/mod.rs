pub mod used_api_key;
