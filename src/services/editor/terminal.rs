use std::path::PathBuf;
use std::sync::Mutex;

use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};

use super::{EditorBoundary, MessageKind};
use crate::models::PathKey;

/// Terminal host: opened files go to stdout, prompts and messages to stderr,
/// picker answers are read from the input line by line.
pub struct TerminalEditor<R> {
    active: Mutex<Option<PathBuf>>,
    input: tokio::sync::Mutex<Lines<R>>,
    print_opened: bool,
}

impl TerminalEditor<BufReader<Stdin>> {
    pub fn stdin(active: Option<PathBuf>, print_opened: bool) -> Self {
        Self::new(BufReader::new(io::stdin()), active, print_opened)
    }
}

impl<R> TerminalEditor<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    pub fn new(reader: R, active: Option<PathBuf>, print_opened: bool) -> Self {
        Self {
            active: Mutex::new(active),
            input: tokio::sync::Mutex::new(reader.lines()),
            print_opened,
        }
    }

    pub fn set_active(&self, path: Option<PathBuf>) {
        if let Ok(mut active) = self.active.lock() {
            *active = path;
        }
    }

    pub fn active(&self) -> Option<PathBuf> {
        self.active.lock().ok().and_then(|a| a.clone())
    }

    /// Next input line, `None` at end of input.
    pub async fn read_line(&self) -> std::io::Result<Option<String>> {
        self.input.lock().await.next_line().await
    }
}

/// Resolves a picker answer: a 1-based number or an exact item name.
pub fn parse_choice(items: &[String], answer: &str) -> Option<String> {
    let answer = answer.trim();
    if answer.is_empty() {
        return None;
    }
    if let Ok(n) = answer.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| items.get(i)).cloned();
    }
    items.iter().find(|item| item.as_str() == answer).cloned()
}

impl<R> EditorBoundary for TerminalEditor<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn resolve_active_file_path(&self) -> Option<String> {
        self.active().map(|p| p.to_string_lossy().into_owned())
    }

    fn open_file(&self, folder: &PathKey, name: &str) {
        let path = folder.join(name);
        if !path.is_file() {
            self.show_message(
                MessageKind::Error,
                &format!("Failed to open {}", path.display()),
            );
            return;
        }
        if self.print_opened {
            println!("{}", path.display());
        }
        self.set_active(Some(path));
    }

    async fn show_picker(&self, items: Vec<String>, prompt: &str) -> Option<String> {
        eprintln!("{prompt}:");
        for (i, item) in items.iter().enumerate() {
            eprintln!("  {:>3}) {}", i + 1, item);
        }
        eprint!("> ");

        match self.read_line().await {
            Ok(Some(line)) => {
                let choice = parse_choice(&items, &line);
                if choice.is_none() && !line.trim().is_empty() {
                    self.show_message(MessageKind::Warning, &format!("No such file: {}", line.trim()));
                }
                choice
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Failed to read picker answer: {}", e);
                None
            }
        }
    }

    fn show_message(&self, kind: MessageKind, text: &str) {
        eprintln!("[{kind}] {text}");
    }
}
