pub mod auth;
pub mod cli_args;
pub mod error;
pub mod extractor;
mod middleware;
mod route;
pub mod server;
pub mod state;
pub mod traits;
pub mod types;
mod utils;
