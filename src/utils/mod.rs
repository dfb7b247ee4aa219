//! Utility modules for error handling, configuration and formatting

pub mod config;
pub mod error;
pub mod paths;
pub mod units;

// Re-export for convenience
pub use config::AppSettings;
pub use error::DelocError;
pub use paths::{get_data_dir, get_database_path};
pub use units::{format_memory_mb, format_uptime, parse_memory_mb, parse_uptime};
