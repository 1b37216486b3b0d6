//! Pure helpers deriving name, folder and extension from a path string.
//! Both `/` and `\` are accepted as separators.

use crate::models::{ExtensionFilter, PathKey};

fn normalize(path: &str) -> String {
    path.replace('\\', "/")
}

/// Final segment of `path`; empty for an empty path or a trailing separator.
pub fn base_name(path: &str) -> String {
    normalize(path)
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Everything before the final segment, or `None` when `path` has no separator.
///
/// A file directly under the root yields `/`.
pub fn parent_folder(path: &str) -> Option<PathKey> {
    let normalized = normalize(path);
    let (parent, _) = normalized.rsplit_once('/')?;
    if parent.is_empty() {
        return Some(PathKey::new("/"));
    }
    Some(PathKey::new(parent))
}

/// Suffix of the base name starting at its last `.`; empty when there is none.
pub fn extension_of(path: &str) -> ExtensionFilter {
    let name = base_name(path);
    match name.rfind('.') {
        Some(idx) => ExtensionFilter::new(&name[idx..]),
        None => ExtensionFilter::default(),
    }
}
