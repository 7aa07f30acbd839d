pub mod analyzer;
pub mod gap;
pub mod handlers;
pub mod recommend;
