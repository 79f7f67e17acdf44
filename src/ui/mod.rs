//! User interaction capability interface.
//!
//! The preflight gate and the target locator never talk to a dialog box
//! directly; they go through [`UserInterface`], so the decision logic is
//! testable without a UI. Implementations:
//!
//! - [`TerminalUI`] - interactive terminal prompts
//! - [`NonInteractiveUI`] - confirmations resolve to their defaults
//! - `NativeDialogUI` - Windows-only native message boxes and folder picker
//! - [`MockUI`] - captures interactions for tests

pub mod mock;
#[cfg(windows)]
pub mod native;
pub mod non_interactive;
pub mod terminal;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use terminal::TerminalUI;

use std::path::PathBuf;

use crate::error::Result;

/// Trait for user interactions during preflight.
///
/// `confirm` takes a default so non-interactive runs have a defined
/// answer for every question.
pub trait UserInterface {
    /// Show an informational message and continue.
    fn notify(&mut self, title: &str, message: &str);

    /// Show a fatal, user-facing message.
    fn error(&mut self, title: &str, message: &str);

    /// Ask a yes/no question.
    fn confirm(&mut self, title: &str, question: &str, default: bool) -> Result<bool>;

    /// Ask the user to select a folder. `None` means they cancelled.
    fn pick_folder(&mut self, title: &str) -> Result<Option<PathBuf>>;

    /// Whether this UI can actually ask the user anything.
    fn is_interactive(&self) -> bool;
}

/// Create the appropriate UI for this platform and mode.
///
/// Windows gets native dialogs; elsewhere an interactive terminal is
/// used when one is attached, and the non-interactive fallback
/// otherwise.
pub fn create_ui(interactive: bool) -> Box<dyn UserInterface> {
    if !interactive {
        return Box::new(NonInteractiveUI::new());
    }

    #[cfg(windows)]
    {
        Box::new(native::NativeDialogUI::new())
    }

    #[cfg(not(windows))]
    {
        if console::Term::stdout().is_term() {
            Box::new(TerminalUI::new())
        } else {
            Box::new(NonInteractiveUI::new())
        }
    }
}
