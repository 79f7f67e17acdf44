//! Native Windows dialogs.
//!
//! Errors and advisories are shown as blocking message boxes, and the
//! installation directory is chosen with the system folder picker.

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::path::PathBuf;

use crate::error::Result;

use super::UserInterface;

/// Native dialog UI implementation (Windows only).
#[derive(Debug, Default)]
pub struct NativeDialogUI;

impl NativeDialogUI {
    /// Create a new native dialog UI.
    pub fn new() -> Self {
        Self
    }
}

impl UserInterface for NativeDialogUI {
    fn notify(&mut self, title: &str, message: &str) {
        MessageDialog::new()
            .set_title(title)
            .set_description(message)
            .set_level(MessageLevel::Info)
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    fn error(&mut self, title: &str, message: &str) {
        MessageDialog::new()
            .set_title(title)
            .set_description(message)
            .set_level(MessageLevel::Error)
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    fn confirm(&mut self, title: &str, question: &str, _default: bool) -> Result<bool> {
        let answer = MessageDialog::new()
            .set_title(title)
            .set_description(question)
            .set_level(MessageLevel::Warning)
            .set_buttons(MessageButtons::YesNo)
            .show();
        Ok(matches!(answer, MessageDialogResult::Yes))
    }

    fn pick_folder(&mut self, title: &str) -> Result<Option<PathBuf>> {
        Ok(FileDialog::new().set_title(title).pick_folder())
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
