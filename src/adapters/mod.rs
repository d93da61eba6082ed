pub mod gpg;
pub mod key_cache;
