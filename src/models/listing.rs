use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Identifies a directory by its absolute path with `/` as the only separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PathKey(String);

impl PathKey {
    pub fn new(path: impl AsRef<str>) -> Self {
        PathKey(path.as_ref().replace('\\', "/"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Full path of the entry `name` inside this directory.
    pub fn join(&self, name: &str) -> PathBuf {
        PathBuf::from(&self.0).join(name)
    }
}

impl fmt::Display for PathKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name suffix (leading dot included) restricting a listing.
///
/// An empty filter matches nothing; callers pass the active file's own
/// extension and reject files without one before listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct ExtensionFilter(String);

impl ExtensionFilter {
    pub fn new(suffix: impl Into<String>) -> Self {
        ExtensionFilter(suffix.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn matches(&self, name: &str) -> bool {
        !self.0.is_empty() && name.ends_with(&self.0)
    }
}

impl fmt::Display for ExtensionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered base names of the regular files in one folder that pass a filter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DirectoryListing(Vec<String>);

impl DirectoryListing {
    pub fn new(names: Vec<String>) -> Self {
        DirectoryListing(names)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// All names except `name`, order preserved.
    pub fn without(&self, name: &str) -> Vec<String> {
        self.0.iter().filter(|n| *n != name).cloned().collect()
    }

    pub fn sort_by_name(&mut self) {
        self.0.sort_by_key(|n| n.to_lowercase());
    }
}

impl From<Vec<String>> for DirectoryListing {
    fn from(names: Vec<String>) -> Self {
        DirectoryListing(names)
    }
}

impl<'a> From<Vec<&'a str>> for DirectoryListing {
    fn from(names: Vec<&'a str>) -> Self {
        DirectoryListing(names.into_iter().map(str::to_string).collect())
    }
}
