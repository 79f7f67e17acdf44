//! The `.lastinstall` reinstall marker.
//!
//! A hidden sentinel file written by the installer session after a
//! successful run. Its presence gates the reinstall-confirmation prompt;
//! its absence marks a likely first run and gates the GPU advisory. It
//! lives in the process working directory, next to the installer binary,
//! not in the game tree.

use std::path::{Path, PathBuf};

use crate::error::{InstallerError, Result};

/// File name of the reinstall marker.
pub const REINSTALL_MARKER: &str = ".lastinstall";

/// Handle to the reinstall marker of a working directory.
#[derive(Debug, Clone)]
pub struct ReinstallMarker {
    path: PathBuf,
}

impl ReinstallMarker {
    /// The marker belonging to the given working directory.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(REINSTALL_MARKER),
        }
    }

    /// Full path of the marker file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a previous install completed here.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Delete the marker, rearming the full install path.
    pub fn remove(&self) -> Result<()> {
        std::fs::remove_file(&self.path).map_err(|source| InstallerError::MarkerRemoval {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn absent_marker_does_not_exist() {
        let temp = TempDir::new().unwrap();
        let marker = ReinstallMarker::in_dir(temp.path());
        assert!(!marker.exists());
    }

    #[test]
    fn present_marker_exists_and_removes() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(REINSTALL_MARKER), b"").unwrap();

        let marker = ReinstallMarker::in_dir(temp.path());
        assert!(marker.exists());

        marker.remove().unwrap();
        assert!(!marker.exists());
    }

    #[test]
    fn removing_an_absent_marker_is_an_error() {
        let temp = TempDir::new().unwrap();
        let marker = ReinstallMarker::in_dir(temp.path());
        let err = marker.remove().unwrap_err();
        assert!(matches!(err, InstallerError::MarkerRemoval { .. }));
    }
}
