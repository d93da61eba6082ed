pub mod key_cache;
pub mod key_tool;
