pub mod handlers;
pub mod quiz;
pub mod scoring;
