//! Error handling for DELoc

use thiserror::Error;

/// Main error type for DELoc
#[derive(Debug, Error)]
pub enum DelocError {
    #[error("DELoc failed to start: {0}")]
    StartupFailure(String),

    #[error("Component not found: {0}")]
    ComponentNotFound(u32),

    #[error("Component is not running: {0}")]
    ComponentNotRunning(String),

    #[error("Container operation failed: {0}")]
    Container(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),
}

impl DelocError {
    /// Wrap any startup-path error as a [`DelocError::StartupFailure`].
    pub fn startup(err: impl std::fmt::Display) -> Self {
        DelocError::StartupFailure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_failure_keeps_message() {
        let err = DelocError::startup("boom");
        assert!(err.to_string().contains("boom"));
        assert!(matches!(err, DelocError::StartupFailure(_)));
    }

    #[test]
    fn database_errors_surface_as_startup_failures() {
        let err = DelocError::startup(anyhow::anyhow!("unable to open database file"));
        assert_eq!(
            err.to_string(),
            "DELoc failed to start: unable to open database file"
        );
    }

    #[test]
    fn not_found_mentions_id() {
        assert_eq!(
            DelocError::ComponentNotFound(7).to_string(),
            "Component not found: 7"
        );
    }
}
