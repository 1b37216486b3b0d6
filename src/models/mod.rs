pub mod file_entry;
pub mod listing;

pub use file_entry::EntryKind;
pub use listing::{DirectoryListing, ExtensionFilter, PathKey};
