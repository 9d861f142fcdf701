use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::task::Task;
use crate::model::theme::ThemeMode;

/// File name for the task collection inside the data directory
const TASKS_FILE: &str = "todos.json";
/// File name for the theme preference
const THEME_FILE: &str = "theme";

/// Error type for storage writes. Reads are infallible by design:
/// missing or malformed data loads as "no data".
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("could not create data directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not encode tasks: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("cannot locate a data directory: $HOME is not set")]
    NoHome,
}

/// Persistence adapter over the data directory.
///
/// Holds no task state of its own: it serializes snapshots handed to it
/// and deserializes whatever is on disk.
#[derive(Debug, Clone)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Storage { dir: dir.into() }
    }

    /// Resolve the data directory: $TODOPAD_DIR, then $XDG_DATA_HOME,
    /// then ~/.local/share/todopad.
    pub fn default_dir() -> Result<PathBuf, StorageError> {
        if let Ok(dir) = std::env::var("TODOPAD_DIR")
            && !dir.trim().is_empty()
        {
            return Ok(PathBuf::from(dir));
        }
        if let Ok(data_home) = std::env::var("XDG_DATA_HOME")
            && !data_home.trim().is_empty()
        {
            return Ok(PathBuf::from(data_home).join("todopad"));
        }
        let home = std::env::var("HOME").map_err(|_| StorageError::NoHome)?;
        Ok(PathBuf::from(home).join(".local/share/todopad"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the data directory if needed; called once at startup
    pub fn ensure_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|e| StorageError::CreateDir {
            path: self.dir.clone(),
            source: e,
        })
    }

    fn tasks_path(&self) -> PathBuf {
        self.dir.join(TASKS_FILE)
    }

    fn theme_path(&self) -> PathBuf {
        self.dir.join(THEME_FILE)
    }

    /// Load the persisted task array. A missing file is an empty
    /// collection. A malformed file is also an empty collection, but it
    /// is renamed aside first so the next save cannot overwrite whatever
    /// the user had.
    pub fn load_tasks(&self) -> Vec<Task> {
        let path = self.tasks_path();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str(&content) {
            Ok(tasks) => tasks,
            Err(_) => {
                let _ = fs::rename(&path, path.with_extension("json.corrupt"));
                Vec::new()
            }
        }
    }

    /// Serialize a snapshot of the collection (temp file + rename, so a
    /// crash mid-write never truncates the previous state)
    pub fn save_tasks(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(tasks)?;
        self.write_atomic(&self.tasks_path(), content.as_bytes())
    }

    /// Read the theme preference; anything but the two literals is `None`
    pub fn load_theme(&self) -> Option<ThemeMode> {
        let content = fs::read_to_string(self.theme_path()).ok()?;
        ThemeMode::from_name(&content)
    }

    pub fn save_theme(&self, mode: ThemeMode) -> Result<(), StorageError> {
        self.write_atomic(&self.theme_path(), mode.name().as_bytes())
    }

    fn write_atomic(&self, path: &Path, content: &[u8]) -> Result<(), StorageError> {
        let wrap = |source| StorageError::Write {
            path: path.to_path_buf(),
            source,
        };
        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(wrap)?;
        tmp.write_all(content).map_err(wrap)?;
        tmp.flush().map_err(wrap)?;
        tmp.persist(path).map_err(|e| wrap(e.error))?;
        Ok(())
    }
}
