pub mod cached_key;
pub mod tool_output;
