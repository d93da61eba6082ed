pub mod file_key_cache;
