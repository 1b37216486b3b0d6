//! The host editor as seen by the navigation commands.

pub mod terminal;

use std::fmt;
use std::future::Future;

use serde::Serialize;

use crate::models::PathKey;

pub use terminal::TerminalEditor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Info,
    Warning,
    Error,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MessageKind::Info => "info",
            MessageKind::Warning => "warning",
            MessageKind::Error => "error",
        };
        f.write_str(label)
    }
}

/// Services the host editor provides to the commands.
pub trait EditorBoundary: Send + Sync {
    /// Absolute path of the focused document, `None` when nothing is focused.
    fn resolve_active_file_path(&self) -> impl Future<Output = Option<String>> + Send;

    /// Opens `name` inside `folder`. Failures are reported by the host itself.
    fn open_file(&self, folder: &PathKey, name: &str);

    /// Single-select list; resolves to `None` when dismissed.
    fn show_picker(
        &self,
        items: Vec<String>,
        prompt: &str,
    ) -> impl Future<Output = Option<String>> + Send;

    fn show_message(&self, kind: MessageKind, text: &str);
}
