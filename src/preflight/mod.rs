//! The ordered precondition gate.
//!
//! Before any file in the installation tree is touched, a fixed sequence
//! of checks runs against the environment and the resolved target. Each
//! check either passes, blocks the run with a user-facing message, or
//! (for the write-permission check only) requests a privileged relaunch.
//!
//! - [`gate`] - the check sequence itself
//! - [`marker`] - the `.lastinstall` reinstall marker
//! - [`outcome`] - gate results and block reasons
//! - [`probe`] - environment access behind a capability trait

pub mod gate;
pub mod marker;
pub mod outcome;
pub mod probe;

pub use gate::{PreflightGate, CONFLICTING_PROCESSES};
pub use marker::{ReinstallMarker, REINSTALL_MARKER};
pub use outcome::{BlockKind, BlockReason, GateResult};
pub use probe::{FixedProbe, SystemEnvironment, SystemProbe};
