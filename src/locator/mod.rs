//! Installation directory resolution.
//!
//! The locator produces the one mutable value everything downstream reads:
//! the directory Trainz is installed in. An explicit CLI path is taken
//! verbatim; otherwise the recorded registry entry is used, and the user
//! is asked to pick a folder when that misses or lacks the marker
//! executable. A cancelled folder selection is a deliberate opt-out, not
//! an error.

pub mod registry;

pub use registry::RegistryStore;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::ui::UserInterface;

/// Path of the marker executable, relative to the installation directory.
///
/// Its presence is the sole proof that a directory holds a Trainz
/// installation.
pub const MARKER_EXECUTABLE: [&str; 2] = ["bin", "TrainzUtil.exe"];

/// Dialog title when asking the user to locate the installation.
const SELECT_DIR_TITLE: &str = "Select the Trainz installation directory";

/// Join the marker executable path onto a directory.
pub fn marker_executable_in(dir: &Path) -> PathBuf {
    MARKER_EXECUTABLE.iter().fold(dir.to_path_buf(), |p, c| p.join(c))
}

/// A resolved installation directory.
///
/// Created once at process start and read-only after resolution; the gate
/// re-validates the marker executable before anything is allowed to touch
/// the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallationTarget {
    install_dir: PathBuf,
    confirmed_by_user: bool,
}

impl InstallationTarget {
    /// A target the user supplied or picked themselves.
    pub fn confirmed(install_dir: impl Into<PathBuf>) -> Self {
        Self {
            install_dir: install_dir.into(),
            confirmed_by_user: true,
        }
    }

    /// A target recovered from the registry without user involvement.
    pub fn located(install_dir: impl Into<PathBuf>) -> Self {
        Self {
            install_dir: install_dir.into(),
            confirmed_by_user: false,
        }
    }

    /// The installation directory.
    pub fn install_dir(&self) -> &Path {
        &self.install_dir
    }

    /// Whether the user explicitly supplied or picked this directory.
    pub fn confirmed_by_user(&self) -> bool {
        self.confirmed_by_user
    }

    /// Full path of the marker executable inside this target.
    pub fn marker_executable(&self) -> PathBuf {
        marker_executable_in(&self.install_dir)
    }

    /// Whether the marker executable is present.
    pub fn has_marker_executable(&self) -> bool {
        self.marker_executable().is_file()
    }
}

/// Source of a previously recorded installation path.
///
/// The production implementation is [`RegistryStore`]; tests substitute
/// fixed values.
pub trait InstallStore {
    /// Look up the recorded installation path, if any.
    fn lookup_install_path(&self) -> Option<PathBuf>;
}

/// Resolves the installation directory for this run.
pub struct TargetLocator<'a> {
    store: &'a dyn InstallStore,
}

impl<'a> TargetLocator<'a> {
    /// Create a locator backed by the given store.
    pub fn new(store: &'a dyn InstallStore) -> Self {
        Self { store }
    }

    /// Resolve the installation directory.
    ///
    /// An explicit path is used verbatim, with no prompting; if it lacks
    /// the marker executable the gate blocks with a message naming it.
    /// Otherwise the store is consulted, and if the lookup misses or the
    /// recorded path lacks the marker executable, the user is asked to
    /// pick a folder exactly once; the gate re-checks the marker
    /// afterwards and blocks if the pick was wrong too. `Ok(None)` means
    /// the user cancelled.
    pub fn resolve(
        &self,
        explicit: Option<PathBuf>,
        ui: &mut dyn UserInterface,
    ) -> Result<Option<InstallationTarget>> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "using explicit installation path");
            return Ok(Some(InstallationTarget::confirmed(path)));
        }

        if let Some(path) = self.store.lookup_install_path() {
            let target = InstallationTarget::located(path);
            if target.has_marker_executable() {
                tracing::info!(
                    path = %target.install_dir().display(),
                    "installation path recovered from registry"
                );
                return Ok(Some(target));
            }
            tracing::info!(
                path = %target.install_dir().display(),
                "recorded installation path lacks the marker executable"
            );
        }

        match ui.pick_folder(SELECT_DIR_TITLE)? {
            Some(path) => {
                tracing::info!(path = %path.display(), "user selected installation path");
                Ok(Some(InstallationTarget::confirmed(path)))
            }
            None => {
                tracing::info!("folder selection cancelled, aborting cleanly");
                Ok(None)
            }
        }
    }
}
