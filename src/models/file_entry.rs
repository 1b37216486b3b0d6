use std::fs;
use std::path::Path;

/// What a directory entry resolves to once symlinks are followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    /// Link whose target is missing or unreadable.
    BrokenLink,
    Other,
}

impl EntryKind {
    /// Classifies `path`, following symlinks so a link to a file counts as a file.
    pub fn of(path: &Path) -> EntryKind {
        match fs::metadata(path) {
            Ok(md) if md.is_file() => EntryKind::File,
            Ok(md) if md.is_dir() => EntryKind::Dir,
            Ok(_) => EntryKind::Other,
            Err(_) => match fs::symlink_metadata(path) {
                Ok(md) if md.file_type().is_symlink() => EntryKind::BrokenLink,
                _ => EntryKind::Other,
            },
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, EntryKind::File)
    }
}
