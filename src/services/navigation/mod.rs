//! Sibling-file navigation commands over a shared, serialized listing cache.

pub mod cache;
pub mod cursor;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::Mutex;

use crate::core::config::Config;
use crate::core::errors::{Error, ErrorKind, Result};
use crate::models::{DirectoryListing, ExtensionFilter, PathKey};
use crate::services::editor::EditorBoundary;
use crate::services::fs::{base_name, extension_of, list_with_timeout, parent_folder};
use crate::services::fs::{DirectoryLister, FsLister};

pub use cache::{CacheEntry, ListingCache};

/// Command identifiers registered with the host.
pub const SHOW_FILES: &str = "relative-path-navigation.showFilesInRelativePath";
pub const OPEN_NEXT: &str = "relative-path-navigation.openNextFileInRelativePath";
pub const OPEN_PREVIOUS: &str = "relative-path-navigation.openPreviousFileInRelativePath";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    ShowFiles,
    OpenNext,
    OpenPrevious,
}

impl Command {
    pub fn id(&self) -> &'static str {
        match self {
            Command::ShowFiles => SHOW_FILES,
            Command::OpenNext => OPEN_NEXT,
            Command::OpenPrevious => OPEN_PREVIOUS,
        }
    }

    pub fn all() -> [Command; 3] {
        [Command::ShowFiles, Command::OpenNext, Command::OpenPrevious]
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.strip_prefix("relative-path-navigation.").unwrap_or(s);
        match name {
            "show" | "list" | "showFilesInRelativePath" => Ok(Command::ShowFiles),
            "next" | "openNextFileInRelativePath" => Ok(Command::OpenNext),
            "prev" | "previous" | "openPreviousFileInRelativePath" => Ok(Command::OpenPrevious),
            other => Err(Error::Other(format!("unknown command: {other}"))),
        }
    }
}

/// How a command invocation ended. The host does not act on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CommandOutcome {
    Opened { path: PathBuf },
    Dismissed,
    Aborted { reason: ErrorKind, message: String },
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Next,
    Previous,
}

impl Direction {
    fn step(self, listing: &DirectoryListing, index: usize) -> Option<usize> {
        match self {
            Direction::Next => cursor::next(listing, index),
            Direction::Previous => cursor::prev(listing, index),
        }
    }
}

struct ActiveFile {
    folder: PathKey,
    name: String,
    filter: ExtensionFilter,
}

/// Owns the listing cache and serializes every command against it.
///
/// A command holds the lock from resolving the active file until the editor
/// has been asked to open or show something, so a second command always sees
/// the state the first one left behind.
pub struct NavigationContext {
    cache: Mutex<ListingCache>,
    lister: Arc<dyn DirectoryLister>,
    listing_timeout: Duration,
    placeholder: String,
}

impl NavigationContext {
    pub fn new(config: &Config) -> Self {
        Self::with_lister(Arc::new(FsLister::new(config.listing.order)), config)
    }

    pub fn with_lister(lister: Arc<dyn DirectoryLister>, config: &Config) -> Self {
        Self {
            cache: Mutex::new(ListingCache::new(config.cache.enabled)),
            lister,
            listing_timeout: config.listing.timeout(),
            placeholder: config.picker.placeholder.clone(),
        }
    }

    pub async fn show_files<E: EditorBoundary>(&self, editor: &E) -> CommandOutcome {
        self.execute(editor, Command::ShowFiles).await
    }

    pub async fn open_next<E: EditorBoundary>(&self, editor: &E) -> CommandOutcome {
        self.execute(editor, Command::OpenNext).await
    }

    pub async fn open_previous<E: EditorBoundary>(&self, editor: &E) -> CommandOutcome {
        self.execute(editor, Command::OpenPrevious).await
    }

    /// Runs `command` to completion. Errors are shown through the editor and
    /// folded into [`CommandOutcome::Aborted`].
    pub async fn execute<E: EditorBoundary>(&self, editor: &E, command: Command) -> CommandOutcome {
        let mut cache = self.cache.lock().await;
        tracing::debug!("Running {}", command);

        let result = match command {
            Command::ShowFiles => self.pick(&mut cache, editor).await,
            Command::OpenNext => self.step(&mut cache, editor, Direction::Next).await,
            Command::OpenPrevious => self.step(&mut cache, editor, Direction::Previous).await,
        };

        match result {
            Ok(outcome) => outcome,
            Err(err) => {
                match err.kind() {
                    ErrorKind::FileSystemError | ErrorKind::Internal => {
                        tracing::error!("{} failed: {}", command, err)
                    }
                    _ => tracing::warn!("{} aborted: {}", command, err),
                }
                let message = err.to_string();
                editor.show_message(err.severity(), &message);
                CommandOutcome::Aborted {
                    reason: err.kind(),
                    message,
                }
            }
        }
    }

    /// Forgets the cached listing and cursor.
    pub async fn deactivate(&self) {
        self.cache.lock().await.clear();
        tracing::debug!("Navigation state cleared");
    }

    /// Copy of the current cache entry, taken under the lock.
    pub async fn snapshot(&self) -> Option<CacheEntry> {
        self.cache.lock().await.entry().cloned()
    }

    async fn pick<E: EditorBoundary>(
        &self,
        cache: &mut ListingCache,
        editor: &E,
    ) -> Result<CommandOutcome> {
        let active = resolve_active(editor).await?;
        let listing = self.listing(cache, &active).await?;

        let items = listing.without(&active.name);
        if items.is_empty() {
            return Err(Error::EmptyResult {
                folder: active.folder.to_string(),
            });
        }

        let Some(selected) = editor.show_picker(items, &self.placeholder).await else {
            return Ok(CommandOutcome::Dismissed);
        };

        cache.set_cursor(
            &active.folder,
            &active.filter,
            cursor::locate(&listing, &selected),
        );
        Ok(self.open(editor, &active.folder, &selected))
    }

    async fn step<E: EditorBoundary>(
        &self,
        cache: &mut ListingCache,
        editor: &E,
        direction: Direction,
    ) -> Result<CommandOutcome> {
        let active = resolve_active(editor).await?;
        let listing = self.listing(cache, &active).await?;
        if listing.is_empty() {
            return Err(Error::EmptyResult {
                folder: active.folder.to_string(),
            });
        }

        let hint = cache
            .cursor(&active.folder, &active.filter)
            .filter(|&i| listing.get(i) == Some(active.name.as_str()));
        let current = match hint {
            Some(index) => {
                tracing::debug!("Reusing cursor {} for {}", index, active.name);
                index
            }
            None => match cursor::locate(&listing, &active.name) {
                Some(index) => index,
                None => {
                    cache.set_cursor(&active.folder, &active.filter, None);
                    return Err(Error::ActiveFileNotListed { name: active.name });
                }
            },
        };

        let target = direction
            .step(&listing, current)
            .ok_or_else(|| Error::EmptyResult {
                folder: active.folder.to_string(),
            })?;
        let name = listing
            .get(target)
            .ok_or_else(|| Error::Other(format!("cursor {target} out of range")))?;

        cache.set_cursor(&active.folder, &active.filter, Some(target));
        Ok(self.open(editor, &active.folder, name))
    }

    async fn listing(
        &self,
        cache: &mut ListingCache,
        active: &ActiveFile,
    ) -> Result<DirectoryListing> {
        if let Some(listing) = cache.lookup(&active.folder, &active.filter) {
            tracing::debug!("Listing cache hit for {} ({})", active.folder, active.filter);
            return Ok(listing.clone());
        }

        tracing::debug!("Listing cache miss for {} ({})", active.folder, active.filter);
        let listing = list_with_timeout(
            self.lister.clone(),
            active.folder.clone(),
            active.filter.clone(),
            self.listing_timeout,
        )
        .await?;
        cache.store(active.folder.clone(), active.filter.clone(), listing.clone());
        Ok(listing)
    }

    fn open<E: EditorBoundary>(&self, editor: &E, folder: &PathKey, name: &str) -> CommandOutcome {
        let path = folder.join(name);
        tracing::info!("Opening {}", path.display());
        editor.open_file(folder, name);
        CommandOutcome::Opened { path }
    }
}

async fn resolve_active<E: EditorBoundary>(editor: &E) -> Result<ActiveFile> {
    let path = editor
        .resolve_active_file_path()
        .await
        .filter(|p| !p.is_empty())
        .ok_or(Error::NoActiveFile)?;

    let name = base_name(&path);
    if name.is_empty() {
        return Err(Error::NoActiveFile);
    }
    let folder = parent_folder(&path).ok_or_else(|| Error::NoParentFolder { path: path.clone() })?;
    let filter = extension_of(&path);
    if filter.is_empty() {
        return Err(Error::NoExtension { name });
    }

    Ok(ActiveFile {
        folder,
        name,
        filter,
    })
}
