pub mod combinations;
pub mod handlers;
pub mod trends;
