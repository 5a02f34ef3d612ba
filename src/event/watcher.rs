use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use super::queue::MessageSender;
use super::types::DashboardMessage;
use crate::error::AppError;

/// How often the file is re-read when no notification arrives
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Watches a JSON-lines file for pushed messages and forwards them to the queue
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
    file_path: PathBuf,
}

impl FileWatcher {
    /// Create a new file watcher that monitors the given path.
    ///
    /// The tailing thread starts at offset 0, so messages already in the file
    /// are replayed through the queue before anything appended later. Each
    /// complete line is delivered exactly once.
    pub fn new(path: impl AsRef<Path>, sender: MessageSender) -> Result<Self, AppError> {
        let file_path = path.as_ref().to_path_buf();

        if !file_path.exists() {
            std::fs::write(&file_path, "")?;
        }

        let (tx, rx) = mpsc::channel();
        let mut watcher = RecommendedWatcher::new(
            move |res| {
                if let Ok(event) = res {
                    let _ = tx.send(event);
                }
            },
            Config::default(),
        )?;
        watcher.watch(&file_path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = %file_path.display(), "watching message file");

        let watch_path = file_path.clone();
        std::thread::spawn(move || {
            let mut last_pos = 0;
            let mut replayed = false;
            loop {
                match read_new_lines(&watch_path, &mut last_pos) {
                    Ok(messages) => {
                        if !replayed {
                            tracing::info!(count = messages.len(), "replaying existing messages");
                            replayed = true;
                        }
                        for message in messages {
                            if sender.blocking_send(message).is_err() {
                                return; // Queue closed
                            }
                        }
                    }
                    Err(e) => tracing::warn!(error = %e, "failed to read message file"),
                }

                // Re-read on every notification and on every poll timeout
                match rx.recv_timeout(POLL_INTERVAL) {
                    Ok(_) | Err(mpsc::RecvTimeoutError::Timeout) => {}
                    Err(mpsc::RecvTimeoutError::Disconnected) => return,
                }
            }
        });

        Ok(Self {
            _watcher: watcher,
            file_path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

/// Read complete lines appended since `last_position` and decode them.
///
/// A trailing line without a newline is left for the next read. Lines that are
/// not UTF-8 or do not decode are logged and skipped; the offset always moves
/// past them.
fn read_new_lines(path: &Path, last_position: &mut u64) -> Result<Vec<DashboardMessage>, std::io::Error> {
    let mut messages = Vec::new();

    let mut file = File::open(path)?;
    let current_size = file.metadata()?.len();

    // If file was truncated, start from beginning
    if current_size < *last_position {
        tracing::info!("message file truncated, re-reading from start");
        *last_position = 0;
    }

    file.seek(SeekFrom::Start(*last_position))?;

    let mut reader = BufReader::new(file);
    let mut line = Vec::new();
    loop {
        line.clear();
        let read = reader.read_until(b'\n', &mut line)?;
        if read == 0 || line.last() != Some(&b'\n') {
            break;
        }
        *last_position += read as u64;

        let text = match std::str::from_utf8(&line) {
            Ok(text) => text.trim(),
            Err(e) => {
                tracing::warn!(error = %e, offset = *last_position - read as u64, "dropping non-UTF-8 line");
                continue;
            }
        };
        if text.is_empty() {
            continue;
        }

        match DashboardMessage::from_json(text) {
            Ok(message) => messages.push(message),
            Err(e) => tracing::warn!(error = %e, line = text, "dropping undecodable message"),
        }
    }

    Ok(messages)
}
