//! SQLite persistence for settings, component state and notifications

pub mod operations;
pub mod schema;

pub use operations::{ComponentStateRecord, DatabaseManager};
pub use schema::initialize_database;
