//! Preflight validation and elevation handoff for Trainz asset-pack installs.
//!
//! The installer binary runs a fixed sequence of environment checks before
//! handing a validated installation directory to the asset-copy session:
//! locate the Trainz installation (registry or user-picked folder), refuse
//! to run from inside it, confirm reinstalls, refuse to touch a tree the
//! game is actively using, and relaunch elevated when write permission is
//! missing.
//!
//! # Modules
//!
//! - [`app`] - Orchestration: locate, gate, escalate or hand off
//! - [`cli`] - Command-line interface and argument normalization
//! - [`context`] - Launch context captured once at process start
//! - [`elevation`] - Relaunch with elevated rights and wait
//! - [`error`] - Error types and result alias
//! - [`locator`] - Installation directory resolution
//! - [`preflight`] - The ordered precondition gate
//! - [`session`] - Handoff boundary to the asset-copy workflow
//! - [`ui`] - Prompt/notify capability interface and implementations

pub mod app;
pub mod cli;
pub mod context;
pub mod elevation;
pub mod error;
pub mod locator;
pub mod preflight;
pub mod session;
pub mod ui;

pub use error::{InstallerError, Result};
