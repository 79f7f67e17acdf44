//! Interactive terminal UI.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};
use std::io::Write;
use std::path::PathBuf;

use crate::error::{InstallerError, Result};

use super::UserInterface;

/// Convert dialoguer errors to InstallerError.
fn map_dialoguer_err(e: dialoguer::Error) -> InstallerError {
    InstallerError::Prompt {
        message: e.to_string(),
    }
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn notify(&mut self, title: &str, message: &str) {
        writeln!(self.term, "{} {}", style(title).bold(), message).ok();
    }

    fn error(&mut self, title: &str, message: &str) {
        writeln!(
            self.term,
            "{} {}",
            style(title).red().bold(),
            style(message).red()
        )
        .ok();
    }

    fn confirm(&mut self, title: &str, question: &str, default: bool) -> Result<bool> {
        writeln!(self.term, "{}", style(title).bold()).ok();
        Confirm::with_theme(&prompt_theme())
            .with_prompt(question)
            .default(default)
            .interact_on(&self.term)
            .map_err(map_dialoguer_err)
    }

    fn pick_folder(&mut self, title: &str) -> Result<Option<PathBuf>> {
        let input: String = Input::with_theme(&prompt_theme())
            .with_prompt(format!("{} (leave empty to cancel)", title))
            .allow_empty(true)
            .interact_text_on(&self.term)
            .map_err(map_dialoguer_err)?;

        let trimmed = input.trim();
        if trimmed.is_empty() {
            Ok(None)
        } else {
            Ok(Some(PathBuf::from(trimmed)))
        }
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_creation() {
        let ui = TerminalUI::new();
        drop(ui);
    }

    #[test]
    fn notify_does_not_panic_without_tty() {
        let mut ui = TerminalUI::new();
        ui.notify("Note", "message");
        ui.error("Error!", "message");
    }
}
