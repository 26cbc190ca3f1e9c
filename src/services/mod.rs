pub mod logger;
pub mod security;
pub mod tool_executor;
pub mod validation;
