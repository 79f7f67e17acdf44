//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. Confirm answers are replayed from a
//! queue; the folder picker returns a configured path, or `None` to
//! simulate the user cancelling.
//!
//! # Example
//!
//! ```
//! use trainz_installer::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_confirm(false);
//!
//! let answer = ui.confirm("Warning!", "Proceed?", true).unwrap();
//! assert!(!answer);
//! assert_eq!(ui.confirms_shown(), &["Proceed?".to_string()]);
//! ```

use std::collections::VecDeque;
use std::path::PathBuf;

use crate::error::Result;

use super::UserInterface;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    notifications: Vec<(String, String)>,
    errors: Vec<(String, String)>,
    confirms_shown: Vec<String>,
    confirm_answers: VecDeque<bool>,
    folder_requests: Vec<String>,
    folder_response: Option<PathBuf>,
    interactive: bool,
}

impl MockUI {
    /// Create a new MockUI. The folder picker cancels by default.
    pub fn new() -> Self {
        Self {
            interactive: true,
            ..Default::default()
        }
    }

    /// Queue an answer for the next `confirm` call.
    ///
    /// Answers are consumed in order; when the queue is empty, `confirm`
    /// falls back to the caller-supplied default.
    pub fn queue_confirm(&mut self, answer: bool) {
        self.confirm_answers.push_back(answer);
    }

    /// Set the path the folder picker returns.
    pub fn set_folder_response(&mut self, path: impl Into<PathBuf>) {
        self.folder_response = Some(path.into());
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// All captured `(title, message)` notifications.
    pub fn notifications(&self) -> &[(String, String)] {
        &self.notifications
    }

    /// All captured `(title, message)` errors.
    pub fn errors(&self) -> &[(String, String)] {
        &self.errors
    }

    /// The questions shown by `confirm`, in order.
    pub fn confirms_shown(&self) -> &[String] {
        &self.confirms_shown
    }

    /// The titles passed to `pick_folder`, in order.
    pub fn folder_requests(&self) -> &[String] {
        &self.folder_requests
    }

    /// Whether any error was shown whose message contains `needle`.
    pub fn saw_error_containing(&self, needle: &str) -> bool {
        self.errors.iter().any(|(_, msg)| msg.contains(needle))
    }
}

impl UserInterface for MockUI {
    fn notify(&mut self, title: &str, message: &str) {
        self.notifications
            .push((title.to_string(), message.to_string()));
    }

    fn error(&mut self, title: &str, message: &str) {
        self.errors.push((title.to_string(), message.to_string()));
    }

    fn confirm(&mut self, _title: &str, question: &str, default: bool) -> Result<bool> {
        self.confirms_shown.push(question.to_string());
        Ok(self.confirm_answers.pop_front().unwrap_or(default))
    }

    fn pick_folder(&mut self, title: &str) -> Result<Option<PathBuf>> {
        self.folder_requests.push(title.to_string());
        Ok(self.folder_response.clone())
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}
