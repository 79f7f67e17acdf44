//! Non-interactive UI for CI/headless runs.
//!
//! Confirmations resolve to the default the caller supplies; folder
//! selection always resolves to "cancelled", which the locator treats as
//! a deliberate user opt-out, so headless runs without a resolvable
//! installation exit cleanly instead of hanging on a prompt.

use std::path::PathBuf;

use crate::error::Result;

use super::UserInterface;

/// UI implementation for non-interactive mode.
#[derive(Debug, Default)]
pub struct NonInteractiveUI;

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new() -> Self {
        Self
    }
}

impl UserInterface for NonInteractiveUI {
    fn notify(&mut self, title: &str, message: &str) {
        println!("{} {}", title, message);
    }

    fn error(&mut self, title: &str, message: &str) {
        eprintln!("{} {}", title, message);
    }

    fn confirm(&mut self, title: &str, question: &str, default: bool) -> Result<bool> {
        tracing::debug!(
            title,
            question,
            default,
            "non-interactive confirm resolved to default"
        );
        Ok(default)
    }

    fn pick_folder(&mut self, _title: &str) -> Result<Option<PathBuf>> {
        Ok(None)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_returns_default() {
        let mut ui = NonInteractiveUI::new();
        assert!(ui.confirm("T", "q", true).unwrap());
        assert!(!ui.confirm("T", "q", false).unwrap());
    }

    #[test]
    fn pick_folder_is_cancelled() {
        let mut ui = NonInteractiveUI::new();
        assert_eq!(ui.pick_folder("choose").unwrap(), None);
    }

    #[test]
    fn non_interactive_is_not_interactive() {
        let ui = NonInteractiveUI::new();
        assert!(!ui.is_interactive());
    }
}
