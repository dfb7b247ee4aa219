//! Data directory resolution
//!
//! The database lives under the platform data directory
//! (`~/.local/share/deloc` on Linux, `~/Library/Application Support/deloc` on macOS).
//! A `--data-dir` flag can override it.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Get the data directory for DELoc, creating it if needed.
pub fn get_data_dir(override_dir: Option<&Path>) -> PathBuf {
    let dir = match override_dir {
        Some(dir) => dir.to_path_buf(),
        None => dirs::data_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".local").join("share")))
            .unwrap_or_else(|| {
                warn!("Could not determine data directory, using the temp dir");
                std::env::temp_dir()
            })
            .join("deloc"),
    };

    if let Err(e) = std::fs::create_dir_all(&dir) {
        warn!("Failed to create data directory {:?}: {}", dir, e);
    }

    debug!("Data directory: {:?}", dir);
    dir
}

/// Get the SQLite database path inside `data_dir`.
pub fn get_database_path(data_dir: &Path) -> PathBuf {
    data_dir.join("deloc.db")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_dir_is_created_and_used() {
        let temp = tempfile::tempdir().unwrap();
        let wanted = temp.path().join("nested").join("deloc");
        let dir = get_data_dir(Some(&wanted));
        assert_eq!(dir, wanted);
        assert!(dir.is_dir());
        assert_eq!(get_database_path(&dir), wanted.join("deloc.db"));
    }
}
