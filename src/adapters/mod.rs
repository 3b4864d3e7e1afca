pub mod database;
pub mod mailqueue;
pub mod system;
