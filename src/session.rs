//! Handoff to the asset installation workflow.
//!
//! Once the gate passes, the validated target is handed to an
//! [`InstallerSession`]. The session owns everything that happens after
//! the checks: copying assets, committing content, and writing the
//! `.lastinstall` marker on success.

use crate::error::Result;
use crate::locator::InstallationTarget;
use crate::preflight::ReinstallMarker;

/// Consumer of a fully validated installation target.
pub trait InstallerSession {
    /// Run the installation against the target.
    fn install(&mut self, target: &InstallationTarget) -> Result<()>;
}

/// Session that announces the validated target and records completion.
///
/// The asset copy itself is carried out by the content pipeline invoked
/// from here; this type owns the surrounding bookkeeping, in particular
/// the reinstall marker written into the working directory afterwards.
pub struct ConsoleSession {
    marker: ReinstallMarker,
}

impl ConsoleSession {
    /// A session that records completion in the given working directory.
    pub fn new(work_dir: &std::path::Path) -> Self {
        Self {
            marker: ReinstallMarker::in_dir(work_dir),
        }
    }
}

impl InstallerSession for ConsoleSession {
    fn install(&mut self, target: &InstallationTarget) -> Result<()> {
        tracing::info!(dir = %target.install_dir().display(), "starting installation");
        println!(
            "Installing into {}",
            target.install_dir().display()
        );

        std::fs::write(self.marker.path(), epoch_seconds())?;
        tracing::info!(marker = %self.marker.path().display(), "installation recorded");
        Ok(())
    }
}

// Seconds since the epoch. Enough for a sentinel value.
fn epoch_seconds() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{secs}\n")
}
