//! Watches configuration and stylesheet files for changes.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher, recommended_watcher};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::{PanelError, Result};

/// Represents a file system event for a watched file.
#[derive(Debug, Clone)]
pub struct FileEvent {
    /// The path of the file that changed
    pub path: PathBuf,
    /// The type of change that occurred
    pub kind: FileEventKind,
}

/// The type of file system change that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileEventKind {
    /// File was modified
    Modified,
    /// File was created
    Created,
    /// File was removed
    Removed,
}

impl FileEventKind {
    fn from_notify(kind: &EventKind) -> Option<Self> {
        match kind {
            EventKind::Create(_) => Some(Self::Created),
            EventKind::Modify(_) => Some(Self::Modified),
            EventKind::Remove(_) => Some(Self::Removed),
            _ => None,
        }
    }
}

/// File watcher over the notify crate.
///
/// Watches the parent directory of every file and forwards only events for
/// the registered files, so files replaced by rename keep being tracked.
pub struct FileWatcher {
    watcher: RecommendedWatcher,
    watched_files: Arc<RwLock<HashSet<PathBuf>>>,
    watched_dirs: HashSet<PathBuf>,
}

impl FileWatcher {
    /// Creates a new file watcher and returns the watcher and event receiver.
    ///
    /// Uses an unbounded channel since file events are infrequent but bursty.
    ///
    /// # Errors
    /// Returns error if the underlying file system watcher cannot be initialized.
    pub fn new() -> Result<(Self, mpsc::UnboundedReceiver<FileEvent>)> {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let watched_files: Arc<RwLock<HashSet<PathBuf>>> = Arc::default();
        let filter = Arc::clone(&watched_files);

        let watcher = recommended_watcher(move |res: notify::Result<Event>| {
            let event = match res {
                Ok(event) => event,
                Err(e) => {
                    warn!(error = %e, "File watcher error");
                    return;
                }
            };

            let Some(kind) = FileEventKind::from_notify(&event.kind) else {
                return;
            };

            let Ok(watched) = filter.read() else {
                return;
            };

            for path in event.paths {
                if watched.contains(&path) {
                    let _ = event_tx.send(FileEvent { path, kind });
                }
            }
        })?;

        Ok((
            Self {
                watcher,
                watched_files,
                watched_dirs: HashSet::new(),
            },
            event_rx,
        ))
    }

    /// Adds a file to the watch list.
    ///
    /// The file itself need not exist yet, only its parent directory.
    ///
    /// # Errors
    /// Returns error if the parent directory cannot be resolved or watched.
    #[cfg(test)]
    pub fn watch_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.register(path.as_ref(), &HashSet::new())
    }

    /// Replaces the set of watched files.
    ///
    /// Directories that no longer contain a watched file are released.
    ///
    /// Files or directories that fail to (un)register are logged and skipped.
    pub fn update_watched_files(&mut self, new_files: &[PathBuf]) {
        if let Ok(mut watched) = self.watched_files.write() {
            watched.clear();
        }

        let previous_dirs = std::mem::take(&mut self.watched_dirs);
        for file in new_files {
            if let Err(e) = self.register(file, &previous_dirs) {
                warn!(path = %file.display(), error = %e, "Cannot watch file");
            }
        }

        for dir in previous_dirs.difference(&self.watched_dirs) {
            if let Err(e) = self.watcher.unwatch(dir) {
                warn!(path = %dir.display(), error = %e, "Cannot unwatch directory");
            }
        }
    }

    /// Files currently being watched.
    #[cfg(test)]
    pub fn watched_files(&self) -> Vec<PathBuf> {
        self.watched_files
            .read()
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn register(&mut self, path: &Path, previous_dirs: &HashSet<PathBuf>) -> Result<()> {
        let Some(target) = watch_target(path)? else {
            return Ok(());
        };
        let dir = target
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| target.clone());

        if !previous_dirs.contains(&dir) && !self.watched_dirs.contains(&dir) {
            self.watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        }
        self.watched_dirs.insert(dir);

        debug!(path = %target.display(), "Watching file");
        if let Ok(mut watched) = self.watched_files.write() {
            watched.insert(target);
        }

        Ok(())
    }
}

/// Canonical location of `path`: canonical parent joined with the file name.
///
/// Returns `None` when the parent directory does not exist.
fn watch_target(path: &Path) -> Result<Option<PathBuf>> {
    let Some(file_name) = path.file_name() else {
        return Ok(None);
    };
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    if !parent.exists() {
        debug!(path = %path.display(), "Parent directory missing, not watching");
        return Ok(None);
    }

    let parent = parent
        .canonicalize()
        .map_err(|e| PanelError::io(e, parent))?;

    Ok(Some(parent.join(file_name)))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::{fs, time::Duration};

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn registers_missing_file_in_existing_dir() {
        let dir = TempDir::new().unwrap();
        let (mut watcher, _rx) = FileWatcher::new().unwrap();

        watcher.watch_file(dir.path().join("config.toml")).unwrap();

        let canonical = dir.path().canonicalize().unwrap().join("config.toml");
        assert_eq!(watcher.watched_files(), vec![canonical]);
    }

    #[test]
    fn skips_file_in_missing_dir() {
        let dir = TempDir::new().unwrap();
        let (mut watcher, _rx) = FileWatcher::new().unwrap();

        watcher
            .watch_file(dir.path().join("nope").join("config.toml"))
            .unwrap();

        assert!(watcher.watched_files().is_empty());
    }

    #[test]
    fn update_replaces_watch_list() {
        let dir = TempDir::new().unwrap();
        let (mut watcher, _rx) = FileWatcher::new().unwrap();
        watcher.watch_file(dir.path().join("a.toml")).unwrap();

        watcher.update_watched_files(&[dir.path().join("b.toml")]);

        let canonical = dir.path().canonicalize().unwrap().join("b.toml");
        assert_eq!(watcher.watched_files(), vec![canonical]);
    }

    #[test]
    fn update_survives_deleted_directory() {
        let dir = TempDir::new().unwrap();
        let gone = dir.path().join("themes");
        fs::create_dir(&gone).unwrap();
        let (mut watcher, _rx) = FileWatcher::new().unwrap();
        watcher
            .update_watched_files(&[gone.join("dark.toml"), dir.path().join("a.toml")]);

        fs::remove_dir(&gone).unwrap();
        watcher.update_watched_files(&[dir.path().join("b.toml")]);

        let canonical = dir.path().canonicalize().unwrap().join("b.toml");
        assert_eq!(watcher.watched_files(), vec![canonical]);
    }

    #[tokio::test]
    async fn forwards_events_for_watched_file_only() {
        let dir = TempDir::new().unwrap();
        let (mut watcher, mut rx) = FileWatcher::new().unwrap();
        let target = dir.path().join("panel.css");
        watcher.watch_file(&target).unwrap();

        fs::write(dir.path().join("other.css"), "x").unwrap();
        fs::write(&target, "label {}").unwrap();

        let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(event.path, dir.path().canonicalize().unwrap().join("panel.css"));
    }
}
