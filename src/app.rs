//! Top-level run flow.
//!
//! Wires the locator, the gate, the escalator, and the session together
//! into one pass: resolve the target, evaluate the preconditions, then
//! either install, relaunch elevated, or report why not.

use std::path::PathBuf;

use crate::context::LaunchContext;
use crate::elevation::{self, EscalationResult};
use crate::error::Result;
use crate::locator::{InstallStore, TargetLocator};
use crate::preflight::{BlockReason, GateResult, PreflightGate, SystemProbe};
use crate::session::InstallerSession;
use crate::ui::UserInterface;

/// What a full run amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The gate passed and the session ran to completion.
    Installed,

    /// The user backed out before the gate finished.
    UserCancelled,

    /// A precondition failed terminally.
    Blocked(BlockReason),

    /// The run was handed off to an elevated relaunch.
    Escalated(EscalationResult),
}

/// One installer run over injected capabilities.
pub struct App<'a> {
    ctx: &'a LaunchContext,
    store: &'a dyn InstallStore,
    probe: &'a dyn SystemProbe,
}

impl<'a> App<'a> {
    pub fn new(
        ctx: &'a LaunchContext,
        store: &'a dyn InstallStore,
        probe: &'a dyn SystemProbe,
    ) -> Self {
        Self { ctx, store, probe }
    }

    /// Resolve, gate, and dispatch.
    ///
    /// Blocks are reported to the user here, with the reason's own title
    /// and message; the caller only maps the outcome to an exit code.
    pub fn run(
        &self,
        explicit_path: Option<PathBuf>,
        reinstall_requested: bool,
        ui: &mut dyn UserInterface,
        session: &mut dyn InstallerSession,
    ) -> Result<RunOutcome> {
        let Some(target) = TargetLocator::new(self.store).resolve(explicit_path, ui)? else {
            return Ok(RunOutcome::UserCancelled);
        };

        let gate = PreflightGate::new(self.ctx, self.probe);
        match gate.evaluate(&target, reinstall_requested, ui)? {
            GateResult::Pass => {
                session.install(&target)?;
                ui.notify("Done!", "The installation completed successfully.");
                Ok(RunOutcome::Installed)
            }
            GateResult::Escalate => {
                let result = elevation::escalate_and_wait(self.ctx, target.install_dir());
                if let Some(message) = escalation_failure_message(&result) {
                    ui.error("Error!", &message);
                }
                Ok(RunOutcome::Escalated(result))
            }
            GateResult::Blocked(reason) => {
                ui.error(reason.title(), &reason.message());
                Ok(RunOutcome::Blocked(reason))
            }
        }
    }
}

/// The user-facing message for a failed or refused relaunch, if any.
///
/// A declined elevation prompt still gets a message: without elevated
/// rights the installation cannot proceed, and a silent exit would look
/// like a crash.
fn escalation_failure_message(result: &EscalationResult) -> Option<String> {
    match result {
        EscalationResult::Succeeded => None,
        EscalationResult::Declined => Some(
            "The installation cannot continue without administrator rights.".to_string(),
        ),
        EscalationResult::LaunchFailed(message) => Some(message.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::InstallationTarget;
    use crate::preflight::FixedProbe;
    use crate::ui::MockUI;
    use std::path::Path;
    use tempfile::TempDir;

    struct FixedStore(Option<PathBuf>);

    impl InstallStore for FixedStore {
        fn lookup_install_path(&self) -> Option<PathBuf> {
            self.0.clone()
        }
    }

    #[derive(Default)]
    struct RecordingSession {
        installed: Vec<PathBuf>,
    }

    impl InstallerSession for RecordingSession {
        fn install(&mut self, target: &InstallationTarget) -> Result<()> {
            self.installed.push(target.install_dir().to_path_buf());
            Ok(())
        }
    }

    fn install_dir_with_marker() -> TempDir {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("bin")).unwrap();
        std::fs::write(temp.path().join("bin").join("TrainzUtil.exe"), b"").unwrap();
        temp
    }

    #[test]
    fn clean_run_installs_into_the_resolved_target() {
        let work = TempDir::new().unwrap();
        let install = install_dir_with_marker();
        let ctx = LaunchContext::new(work.path(), work.path().join("installer"));
        let store = FixedStore(Some(install.path().to_path_buf()));
        let probe = FixedProbe::default();
        let mut ui = MockUI::new();
        let mut session = RecordingSession::default();

        let outcome = App::new(&ctx, &store, &probe)
            .run(None, false, &mut ui, &mut session)
            .unwrap();

        assert_eq!(outcome, RunOutcome::Installed);
        assert_eq!(session.installed, vec![install.path().to_path_buf()]);
        assert_eq!(ui.notifications().len(), 1);
    }

    #[test]
    fn cancelled_folder_pick_skips_the_gate_and_session() {
        let work = TempDir::new().unwrap();
        let ctx = LaunchContext::new(work.path(), work.path().join("installer"));
        let store = FixedStore(None);
        let probe = FixedProbe::default().with_process("trainz");
        let mut ui = MockUI::new();
        let mut session = RecordingSession::default();

        let outcome = App::new(&ctx, &store, &probe)
            .run(None, false, &mut ui, &mut session)
            .unwrap();

        assert_eq!(outcome, RunOutcome::UserCancelled);
        assert!(session.installed.is_empty());
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn blocked_run_reports_the_reason_and_skips_the_session() {
        let work = TempDir::new().unwrap();
        let install = install_dir_with_marker();
        let ctx = LaunchContext::new(work.path(), work.path().join("installer"));
        let store = FixedStore(Some(install.path().to_path_buf()));
        let probe = FixedProbe::default().with_process("Trainz.exe");
        let mut ui = MockUI::new();
        let mut session = RecordingSession::default();

        let outcome = App::new(&ctx, &store, &probe)
            .run(None, false, &mut ui, &mut session)
            .unwrap();

        assert!(matches!(
            outcome,
            RunOutcome::Blocked(BlockReason::GameRunning { .. })
        ));
        assert!(session.installed.is_empty());
        assert!(ui.saw_error_containing("trainz"));
    }

    #[cfg(not(windows))]
    #[test]
    fn unwritable_target_reports_the_failed_relaunch() {
        let work = TempDir::new().unwrap();
        let install = install_dir_with_marker();
        let ctx = LaunchContext::new(work.path(), work.path().join("installer"));
        let store = FixedStore(Some(install.path().to_path_buf()));
        let probe = FixedProbe::default().with_writable(false);
        let mut ui = MockUI::new();
        let mut session = RecordingSession::default();

        let outcome = App::new(&ctx, &store, &probe)
            .run(None, false, &mut ui, &mut session)
            .unwrap();

        assert!(matches!(
            outcome,
            RunOutcome::Escalated(EscalationResult::LaunchFailed(_))
        ));
        assert!(session.installed.is_empty());
        assert!(ui.saw_error_containing("Windows"));
    }

    #[test]
    fn declined_elevation_gets_a_message() {
        let message =
            escalation_failure_message(&EscalationResult::Declined).unwrap();
        assert!(message.contains("administrator rights"));
    }

    #[test]
    fn failed_relaunch_message_carries_the_cause() {
        let result = EscalationResult::LaunchFailed("access denied".into());
        assert_eq!(
            escalation_failure_message(&result).as_deref(),
            Some("access denied")
        );
    }

    #[test]
    fn successful_escalation_stays_silent() {
        assert_eq!(escalation_failure_message(&EscalationResult::Succeeded), None);
    }

    #[test]
    fn explicit_path_flows_through_to_the_session_verbatim() {
        let work = TempDir::new().unwrap();
        let install = install_dir_with_marker();
        let ctx = LaunchContext::new(work.path(), work.path().join("installer"));
        let store = FixedStore(Some(Path::new("/somewhere/else").to_path_buf()));
        let probe = FixedProbe::default();
        let mut ui = MockUI::new();
        let mut session = RecordingSession::default();

        let outcome = App::new(&ctx, &store, &probe)
            .run(
                Some(install.path().to_path_buf()),
                false,
                &mut ui,
                &mut session,
            )
            .unwrap();

        assert_eq!(outcome, RunOutcome::Installed);
        assert_eq!(session.installed, vec![install.path().to_path_buf()]);
    }
}
