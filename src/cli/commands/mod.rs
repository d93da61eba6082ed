pub mod cache;
pub mod export;
pub mod status;
