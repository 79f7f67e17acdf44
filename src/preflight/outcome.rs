//! Gate results and block reasons.

use std::path::PathBuf;

/// The verdict of the precondition gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateResult {
    /// Every check passed; hand off to the installer session.
    Pass,

    /// A check failed terminally; show the reason and stop.
    Blocked(BlockReason),

    /// Write permission is missing. Not a failure: the caller relaunches
    /// the process elevated with the same resolved path, then exits.
    Escalate,
}

/// Why the gate refused to continue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockReason {
    /// The installer was started from inside the installation directory.
    RunInsideTarget,

    /// The marker executable is absent from the resolved target.
    MarkerExecutableMissing { path: PathBuf },

    /// The game (or its content manager) is currently running.
    GameRunning { process: String },

    /// The user declined the texture-compression advisory.
    AdvisoryDeclined,
}

/// Whether a block is the user's choice or an environment problem.
///
/// User choices exit with status 0, environment problems with 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Environment,
    UserDeclined,
}

impl BlockReason {
    /// Classify this reason for exit-code mapping.
    pub fn kind(&self) -> BlockKind {
        match self {
            BlockReason::AdvisoryDeclined => BlockKind::UserDeclined,
            _ => BlockKind::Environment,
        }
    }

    /// Dialog title for this reason.
    pub fn title(&self) -> &'static str {
        match self.kind() {
            BlockKind::Environment => "Error!",
            BlockKind::UserDeclined => "Warning!",
        }
    }

    /// The user-facing message explaining the block.
    pub fn message(&self) -> String {
        match self {
            BlockReason::RunInsideTarget => {
                "The installer cannot run from inside the Trainz installation directory. \
                 Move it to another folder and try again."
                    .to_string()
            }
            BlockReason::MarkerExecutableMissing { path } => format!(
                "TrainzUtil.exe could not be found in the installation directory \
                 (expected at {}). Check the selected path and try again.",
                path.display()
            ),
            BlockReason::GameRunning { process } => format!(
                "Trainz must be closed before the installation can continue \
                 ('{}' is running). Close the game and try again.",
                process
            ),
            BlockReason::AdvisoryDeclined => {
                "Installation aborted at the texture-compression advisory.".to_string()
            }
        }
    }
}
