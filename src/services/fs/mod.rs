pub mod listing;
pub mod paths;

pub use listing::{list_files, list_files_sync, list_with_timeout, DirectoryLister, FsLister};
pub use paths::{base_name, extension_of, parent_folder};
