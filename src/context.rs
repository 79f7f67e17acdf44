//! Launch context captured once at process start.
//!
//! The working directory and executable path are read once in `main` and
//! threaded through the locator, the gate, and the escalator as an
//! explicit parameter, so every consumer can be tested against a temp
//! directory.

use std::path::{Path, PathBuf};

use crate::error::{InstallerError, Result};

/// Immutable facts about how this process was launched.
#[derive(Debug, Clone)]
pub struct LaunchContext {
    current_dir: PathBuf,
    executable: PathBuf,
}

impl LaunchContext {
    /// Capture the context of the running process.
    pub fn capture() -> Result<Self> {
        let current_dir =
            std::env::current_dir().map_err(|source| InstallerError::LaunchContext {
                what: "current working directory",
                source,
            })?;
        let executable = std::env::current_exe().map_err(|source| InstallerError::LaunchContext {
            what: "executable path",
            source,
        })?;
        Ok(Self {
            current_dir,
            executable,
        })
    }

    /// Build a context from explicit paths (for tests).
    pub fn new(current_dir: impl Into<PathBuf>, executable: impl Into<PathBuf>) -> Self {
        Self {
            current_dir: current_dir.into(),
            executable: executable.into(),
        }
    }

    /// The working directory at process start.
    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    /// The path of the running executable.
    pub fn executable(&self) -> &Path {
        &self.executable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_returns_real_paths() {
        let ctx = LaunchContext::capture().unwrap();
        assert!(ctx.current_dir().is_absolute());
        assert!(!ctx.executable().as_os_str().is_empty());
    }

    #[test]
    fn new_uses_given_paths() {
        let ctx = LaunchContext::new("/tmp/work", "/usr/bin/installer");
        assert_eq!(ctx.current_dir(), Path::new("/tmp/work"));
        assert_eq!(ctx.executable(), Path::new("/usr/bin/installer"));
    }
}
