pub mod catalog;
pub mod protocol;
pub mod schema;
pub mod server;
