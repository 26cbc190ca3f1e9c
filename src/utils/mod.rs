pub mod sanitize;
pub mod suggest;
pub mod text;
pub mod tool_errors;
