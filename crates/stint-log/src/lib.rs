//! Markdown session-log storage for stint.
//!
//! The log is a single flat text document: a fixed header line, a blank
//! line, then one entry per completed session in most-recent-first order
//! (new entries are inserted directly under the header, not appended at
//! the end).
//!
//! # Concurrency
//!
//! Each append is a whole-file read-modify-write. [`SessionLog`] holds an
//! internal guard so concurrent appends from one process are serialized
//! and cannot interleave their read and write halves. Writers in other
//! processes are not coordinated; the last write wins.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

use stint_core::SessionEntry;

/// First line of a freshly created log document.
pub const LOG_HEADER: &str = "Time entries tracked by stint";

/// Entries go directly under the header and its blank line.
const ENTRY_INSERT_INDEX: usize = 2;

/// Storage errors. The timer has already transitioned by the time the
/// log is written, so none of these lose the caller's elapsed time, only
/// its durable record.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("failed to create log document {path}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read log document {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write log document {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// File access used by the log writer.
///
/// The production implementation is [`FsStorage`]; tests inject failing
/// implementations to exercise the error paths.
pub trait Storage {
    fn exists(&self, path: &Path) -> bool;
    fn read(&self, path: &Path) -> io::Result<String>;
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
    fn create(&self, path: &Path, initial: &str) -> io::Result<()>;
}

/// [`Storage`] over the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStorage;

impl Storage for FsStorage {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        std::fs::write(path, contents)
    }

    fn create(&self, path: &Path, initial: &str) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, initial)
    }
}

/// The session log writer.
pub struct SessionLog<S = FsStorage> {
    storage: S,
    path: PathBuf,
    /// Serializes the read-modify-write cycle across threads.
    guard: Mutex<()>,
}

impl SessionLog<FsStorage> {
    /// A log backed by the filesystem at `path`. The document is created
    /// lazily on the first append.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_storage(FsStorage, path)
    }
}

impl<S: Storage> SessionLog<S> {
    pub fn with_storage(storage: S, path: impl Into<PathBuf>) -> Self {
        Self {
            storage,
            path: path.into(),
            guard: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Inserts `entry` at the top of the document, creating the document
    /// with its two-line header if it does not exist yet.
    ///
    /// The whole operation fails on any create/read/write error, leaving
    /// the document as it was.
    pub fn append(&self, entry: &SessionEntry) -> Result<(), LogError> {
        // A poisoned guard means another append panicked mid-write; the
        // document itself is still whole-file consistent, so proceed.
        let _guard = self.guard.lock().unwrap_or_else(PoisonError::into_inner);

        if !self.storage.exists(&self.path) {
            self.storage
                .create(&self.path, &format!("{LOG_HEADER}\n\n"))
                .map_err(|source| LogError::Create {
                    path: self.path.clone(),
                    source,
                })?;
            tracing::debug!(path = %self.path.display(), "created log document");
        }

        let contents = self
            .storage
            .read(&self.path)
            .map_err(|source| LogError::Read {
                path: self.path.clone(),
                source,
            })?;

        let line = entry.to_line();
        let mut lines: Vec<&str> = contents.lines().collect();
        // Clamp in case the document was externally truncated below the
        // header; never re-impose the header over user edits.
        let index = ENTRY_INSERT_INDEX.min(lines.len());
        lines.insert(index, &line);

        let mut updated = lines.join("\n");
        updated.push('\n');
        self.storage
            .write(&self.path, &updated)
            .map_err(|source| LogError::Write {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(path = %self.path.display(), "session entry recorded");
        Ok(())
    }
}
