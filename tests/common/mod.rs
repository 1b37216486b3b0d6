#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use relnav::models::{DirectoryListing, ExtensionFilter, PathKey};
use relnav::services::fs::DirectoryLister;
use relnav::{EditorBoundary, Error, MessageKind, Result};

/// In-memory folders; unknown folders fail like a missing directory.
#[derive(Default)]
pub struct FakeLister {
    folders: Mutex<HashMap<String, Vec<String>>>,
    calls: AtomicUsize,
}

impl FakeLister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_folder(self, folder: &str, names: &[&str]) -> Self {
        self.set_folder(folder, names);
        self
    }

    pub fn set_folder(&self, folder: &str, names: &[&str]) {
        self.folders.lock().unwrap().insert(
            folder.to_string(),
            names.iter().map(|n| n.to_string()).collect(),
        );
    }

    pub fn remove_folder(&self, folder: &str) {
        self.folders.lock().unwrap().remove(folder);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DirectoryLister for FakeLister {
    fn list(&self, folder: &PathKey, filter: &ExtensionFilter) -> Result<DirectoryListing> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let folders = self.folders.lock().unwrap();
        match folders.get(folder.as_str()) {
            Some(names) => Ok(DirectoryListing::new(
                names.iter().filter(|n| filter.matches(n)).cloned().collect(),
            )),
            None => Err(Error::file_system(
                folder.as_str(),
                io::Error::from(io::ErrorKind::NotFound),
            )),
        }
    }
}

/// Editor double that records everything the commands ask of it.
pub struct ScriptedEditor {
    id: &'static str,
    active: Mutex<Option<String>>,
    picks: Mutex<VecDeque<Option<String>>>,
    opened: Mutex<Vec<PathBuf>>,
    messages: Mutex<Vec<(MessageKind, String)>>,
    pickers: Mutex<Vec<Vec<String>>>,
    log: Arc<Mutex<Vec<String>>>,
    resolve_delay: Duration,
}

impl ScriptedEditor {
    pub fn new(active: Option<&str>) -> Self {
        Self::with_log("editor", active, Arc::default(), Duration::ZERO)
    }

    pub fn with_log(
        id: &'static str,
        active: Option<&str>,
        log: Arc<Mutex<Vec<String>>>,
        resolve_delay: Duration,
    ) -> Self {
        Self {
            id,
            active: Mutex::new(active.map(str::to_string)),
            picks: Mutex::default(),
            opened: Mutex::default(),
            messages: Mutex::default(),
            pickers: Mutex::default(),
            log,
            resolve_delay,
        }
    }

    pub fn answer_picker(&self, choice: Option<&str>) {
        self.picks
            .lock()
            .unwrap()
            .push_back(choice.map(str::to_string));
    }

    pub fn active(&self) -> Option<String> {
        self.active.lock().unwrap().clone()
    }

    pub fn opened(&self) -> Vec<PathBuf> {
        self.opened.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<(MessageKind, String)> {
        self.messages.lock().unwrap().clone()
    }

    pub fn pickers(&self) -> Vec<Vec<String>> {
        self.pickers.lock().unwrap().clone()
    }

    fn record(&self, event: &str) {
        self.log.lock().unwrap().push(format!("{event}:{}", self.id));
    }
}

impl EditorBoundary for ScriptedEditor {
    async fn resolve_active_file_path(&self) -> Option<String> {
        self.record("resolve");
        if !self.resolve_delay.is_zero() {
            tokio::time::sleep(self.resolve_delay).await;
        }
        self.active()
    }

    fn open_file(&self, folder: &PathKey, name: &str) {
        self.record("open");
        let path = folder.join(name);
        *self.active.lock().unwrap() = Some(path.to_string_lossy().into_owned());
        self.opened.lock().unwrap().push(path);
    }

    async fn show_picker(&self, items: Vec<String>, _prompt: &str) -> Option<String> {
        self.record("pick");
        self.pickers.lock().unwrap().push(items);
        self.picks.lock().unwrap().pop_front().flatten()
    }

    fn show_message(&self, kind: MessageKind, text: &str) {
        self.messages.lock().unwrap().push((kind, text.to_string()));
    }
}
