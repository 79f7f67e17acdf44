//! Error types for installer operations.
//!
//! This module defines [`InstallerError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! Blocked preflight checks and user cancellations are not errors; they
//! are ordinary outcomes modeled by `preflight::GateResult` and
//! `app::RunOutcome`. Errors here are genuine failures: broken prompts,
//! filesystem trouble, a marker file that refused to go away.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for installer operations.
#[derive(Debug, Error)]
pub enum InstallerError {
    /// An interactive prompt could not be shown or read.
    #[error("Prompt failed: {message}")]
    Prompt { message: String },

    /// The reinstall marker exists but could not be removed.
    #[error("Could not remove reinstall marker at {path}: {source}")]
    MarkerRemoval {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The launch context could not be captured (cwd or executable path).
    #[error("Could not determine {what}: {source}")]
    LaunchContext {
        what: &'static str,
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for installer operations.
pub type Result<T> = std::result::Result<T, InstallerError>;
