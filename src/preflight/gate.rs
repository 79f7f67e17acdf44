//! The precondition check sequence.
//!
//! Checks run in a fixed order, cheapest and most fatal first, and the
//! first non-passing check decides the verdict. The write-permission
//! check is deliberately non-terminal: a missing permission is
//! self-correctable by relaunching elevated, so it yields
//! [`GateResult::Escalate`] instead of a block.

use crate::context::LaunchContext;
use crate::error::Result;
use crate::locator::{self, InstallationTarget};
use crate::ui::UserInterface;

use super::marker::ReinstallMarker;
use super::outcome::{BlockReason, GateResult};
use super::probe::SystemProbe;

/// Normalized process names that must not be running during an install.
pub const CONFLICTING_PROCESSES: [&str; 2] = ["trainz", "contentmanager"];

const REINSTALL_QUESTION: &str = "Do you really want to proceed with the reinstallation?\n\
    This can take a while.";

const GPU_ADVISORY_QUESTION: &str = "An NVIDIA graphics card was detected on this system.\n\n\
    Textures can come out corrupted if hardware-accelerated texture compression is enabled \
    in Trainz during the installation. Make sure this setting is turned off in the Content \
    Manager before proceeding.\n\nAre you sure you want to continue?";

/// The ordered precondition gate.
pub struct PreflightGate<'a> {
    ctx: &'a LaunchContext,
    probe: &'a dyn SystemProbe,
}

impl<'a> PreflightGate<'a> {
    /// Create a gate for this launch context and probe.
    pub fn new(ctx: &'a LaunchContext, probe: &'a dyn SystemProbe) -> Self {
        Self { ctx, probe }
    }

    /// Run the checks against a resolved target.
    ///
    /// Short-circuits on the first non-passing check. The
    /// reinstall-confirmation step never blocks; it only decides whether
    /// the `.lastinstall` marker survives into the later checks.
    pub fn evaluate(
        &self,
        target: &InstallationTarget,
        reinstall_requested: bool,
        ui: &mut dyn UserInterface,
    ) -> Result<GateResult> {
        // Running from inside the game tree would let the install
        // overwrite the running installer's own directory.
        if locator::marker_executable_in(self.ctx.current_dir()).is_file() {
            tracing::warn!("installer started from inside the installation directory");
            return Ok(GateResult::Blocked(BlockReason::RunInsideTarget));
        }

        let marker = ReinstallMarker::in_dir(self.ctx.current_dir());
        if reinstall_requested && marker.exists() {
            if ui.confirm("Warning!", REINSTALL_QUESTION, false)? {
                tracing::info!(path = %marker.path().display(), "reinstall confirmed, removing marker");
                marker.remove()?;
            } else {
                tracing::info!("reinstall declined, marker kept");
            }
        }

        if !target.has_marker_executable() {
            return Ok(GateResult::Blocked(BlockReason::MarkerExecutableMissing {
                path: target.marker_executable(),
            }));
        }

        if let Some(process) = self.conflicting_process() {
            tracing::warn!(%process, "conflicting process is running");
            return Ok(GateResult::Blocked(BlockReason::GameRunning { process }));
        }

        if !self.probe.has_write_permission(target.install_dir()) {
            tracing::info!(
                dir = %target.install_dir().display(),
                "no write permission, requesting elevation"
            );
            return Ok(GateResult::Escalate);
        }

        if self.probe.is_known_gpu_vendor() && !marker.exists() {
            if !ui.confirm("Warning!", GPU_ADVISORY_QUESTION, true)? {
                return Ok(GateResult::Blocked(BlockReason::AdvisoryDeclined));
            }
        }

        Ok(GateResult::Pass)
    }

    fn conflicting_process(&self) -> Option<String> {
        let running = self.probe.running_process_names();
        CONFLICTING_PROCESSES
            .iter()
            .find(|name| running.contains(**name))
            .map(|name| name.to_string())
    }
}
