pub mod analytics;
pub mod learning;
pub mod role;
pub mod skill;
