pub mod handlers;
pub mod popularity;
pub mod tracking;
