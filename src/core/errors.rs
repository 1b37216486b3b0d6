use std::io;

use serde::Serialize;
use thiserror::Error;

use crate::services::editor::MessageKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("No active editor.")]
    NoActiveFile,
    #[error("Can't find parent folder for '{path}'.")]
    NoParentFolder { path: String },
    #[error("The file '{name}' has no extension.")]
    NoExtension { name: String },
    #[error("failed to list '{folder}': {source}")]
    FileSystem {
        folder: String,
        #[source]
        source: io::Error,
    },
    #[error("'{name}' is not listed in its parent folder.")]
    ActiveFileNotListed { name: String },
    #[error("There is no extra files in the parent folder.")]
    EmptyResult { folder: String },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("config error: {0}")]
    Config(String),
    #[error("other error: {0}")]
    Other(String),
}

/// Stable, serializable discriminant of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NoActiveFile,
    NoParentFolder,
    NoExtension,
    FileSystemError,
    ActiveFileNotListed,
    EmptyResult,
    Internal,
}

impl Error {
    pub fn file_system(folder: impl Into<String>, source: io::Error) -> Self {
        Error::FileSystem {
            folder: folder.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NoActiveFile => ErrorKind::NoActiveFile,
            Error::NoParentFolder { .. } => ErrorKind::NoParentFolder,
            Error::NoExtension { .. } => ErrorKind::NoExtension,
            Error::FileSystem { .. } => ErrorKind::FileSystemError,
            Error::ActiveFileNotListed { .. } => ErrorKind::ActiveFileNotListed,
            Error::EmptyResult { .. } => ErrorKind::EmptyResult,
            Error::Io(_) | Error::Config(_) | Error::Other(_) => ErrorKind::Internal,
        }
    }

    /// Severity used when the error is surfaced to the user.
    pub fn severity(&self) -> MessageKind {
        match self.kind() {
            ErrorKind::EmptyResult => MessageKind::Info,
            ErrorKind::FileSystemError | ErrorKind::Internal => MessageKind::Error,
            _ => MessageKind::Warning,
        }
    }
}
