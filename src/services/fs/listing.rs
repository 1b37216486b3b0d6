use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tokio::task;

use crate::core::config::ListingOrder;
use crate::core::errors::{Error, Result};
use crate::models::{DirectoryListing, EntryKind, ExtensionFilter, PathKey};

/// Source of sibling listings; the file system in production.
pub trait DirectoryLister: Send + Sync {
    fn list(&self, folder: &PathKey, filter: &ExtensionFilter) -> Result<DirectoryListing>;
}

/// Lists a real directory with [`list_files_sync`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister {
    order: ListingOrder,
}

impl FsLister {
    pub fn new(order: ListingOrder) -> Self {
        Self { order }
    }
}

impl DirectoryLister for FsLister {
    fn list(&self, folder: &PathKey, filter: &ExtensionFilter) -> Result<DirectoryListing> {
        let mut listing = list_files_sync(folder, filter)?;
        if self.order == ListingOrder::Name {
            listing.sort_by_name();
        }
        Ok(listing)
    }
}

/// Runs `lister` on the blocking pool, giving up after `limit`.
///
/// A timeout surfaces as a file-system error; the blocking task is left to
/// finish on its own.
pub async fn list_with_timeout(
    lister: Arc<dyn DirectoryLister>,
    folder: PathKey,
    filter: ExtensionFilter,
    limit: Duration,
) -> Result<DirectoryListing> {
    let key = folder.clone();
    let handle = task::spawn_blocking(move || lister.list(&folder, &filter));
    match tokio::time::timeout(limit, handle).await {
        Ok(Ok(result)) => result,
        Ok(Err(join_err)) => Err(Error::Other(format!("listing task failed: {join_err}"))),
        Err(_) => Err(Error::file_system(
            key.as_str(),
            std::io::Error::new(std::io::ErrorKind::TimedOut, "directory listing timed out"),
        )),
    }
}

pub async fn list_files(folder: &PathKey, filter: &ExtensionFilter) -> Result<DirectoryListing> {
    // Use a blocking task for filesystem IO to avoid blocking async executors.
    let folder = folder.clone();
    let filter = filter.clone();
    task::spawn_blocking(move || list_files_sync(&folder, &filter))
        .await
        .map_err(|e| Error::Other(format!("listing task failed: {e}")))?
}

/// Regular files (or links to them) in `folder` whose name ends with `filter`,
/// in enumeration order. Non-recursive.
pub fn list_files_sync(folder: &PathKey, filter: &ExtensionFilter) -> Result<DirectoryListing> {
    let dir = Path::new(folder.as_str());
    let entries = fs::read_dir(dir).map_err(|e| Error::file_system(folder.as_str(), e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::file_system(folder.as_str(), e))?;
        let name = os_str_to_string(entry.file_name());
        if !filter.matches(&name) {
            continue;
        }
        if EntryKind::of(&entry.path()).is_file() {
            names.push(name);
        }
    }

    tracing::debug!(
        "Listed {} '{}' file(s) in {}",
        names.len(),
        filter,
        folder
    );
    Ok(DirectoryListing::new(names))
}

fn os_str_to_string(s: impl AsRef<OsStr>) -> String {
    s.as_ref().to_string_lossy().into_owned()
}
