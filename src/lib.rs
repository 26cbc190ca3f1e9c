pub mod app;
pub mod client;
pub mod config;
pub mod constants;
pub mod errors;
pub mod managers;
pub mod mcp;
pub mod services;
pub mod types;
pub mod utils;
