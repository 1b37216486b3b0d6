//! Cycle through the sibling files that share the active file's extension.

pub mod core;
pub mod models;
pub mod services;

pub use crate::core::config::Config;
pub use crate::core::errors::{Error, ErrorKind, Result};
pub use crate::services::editor::{EditorBoundary, MessageKind, TerminalEditor};
pub use crate::services::navigation::{Command, CommandOutcome, NavigationContext};
