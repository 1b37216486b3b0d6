use crate::models::{DirectoryListing, ExtensionFilter, PathKey};

/// The single memoized listing plus the cursor last computed against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub folder: PathKey,
    pub filter: ExtensionFilter,
    pub listing: DirectoryListing,
    pub cursor: Option<usize>,
}

impl CacheEntry {
    fn is_for(&self, folder: &PathKey, filter: &ExtensionFilter) -> bool {
        &self.folder == folder && &self.filter == filter
    }
}

/// One-slot listing cache keyed by folder and filter.
///
/// Empty listings are never stored, so a folder that listed empty is read
/// again on the next request.
#[derive(Debug)]
pub struct ListingCache {
    entry: Option<CacheEntry>,
    enabled: bool,
}

impl Default for ListingCache {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ListingCache {
    pub fn new(enabled: bool) -> Self {
        Self {
            entry: None,
            enabled,
        }
    }

    /// Stored listing for this key, if any.
    pub fn lookup(&self, folder: &PathKey, filter: &ExtensionFilter) -> Option<&DirectoryListing> {
        if !self.enabled {
            return None;
        }
        self.entry
            .as_ref()
            .filter(|e| e.is_for(folder, filter) && !e.listing.is_empty())
            .map(|e| &e.listing)
    }

    /// Replaces the entry with a fresh listing and an unknown cursor.
    /// Empty listings leave the current entry in place.
    pub fn store(&mut self, folder: PathKey, filter: ExtensionFilter, listing: DirectoryListing) {
        if !self.enabled || listing.is_empty() {
            return;
        }
        self.entry = Some(CacheEntry {
            folder,
            filter,
            listing,
            cursor: None,
        });
    }

    /// Cursor hint, only when it was computed for this very key.
    pub fn cursor(&self, folder: &PathKey, filter: &ExtensionFilter) -> Option<usize> {
        self.entry
            .as_ref()
            .filter(|e| e.is_for(folder, filter))
            .and_then(|e| e.cursor)
    }

    /// Records the cursor for the current entry; ignored on key mismatch.
    pub fn set_cursor(&mut self, folder: &PathKey, filter: &ExtensionFilter, cursor: Option<usize>) {
        if let Some(entry) = self.entry.as_mut().filter(|e| e.is_for(folder, filter)) {
            entry.cursor = cursor;
        }
    }

    pub fn entry(&self) -> Option<&CacheEntry> {
        self.entry.as_ref()
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }
}
