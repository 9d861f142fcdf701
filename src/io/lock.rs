use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

/// Single-instance guard: an advisory flock on `.lock` inside the data
/// directory.
///
/// The store assumes it is the only writer, so a second instance fails
/// fast instead of silently interleaving saves with the first.
pub struct DirLock {
    _file: File,
    path: PathBuf,
}

/// Error type for lock acquisition
#[derive(Debug, thiserror::Error)]
pub enum LockError {
    #[error("could not create lock file at {path}: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{path} is held by another todopad instance using this data directory")]
    Held { path: PathBuf },
}

impl DirLock {
    /// Take the lock, or fail immediately if another process holds it
    pub fn acquire(data_dir: &Path) -> Result<Self, LockError> {
        let path = data_dir.join(".lock");
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&path)
            .map_err(|e| LockError::Create {
                path: path.clone(),
                source: e,
            })?;
        match try_flock(&file) {
            Ok(()) => Ok(DirLock { _file: file, path }),
            Err(_) => Err(LockError::Held { path }),
        }
    }
}

impl Drop for DirLock {
    fn drop(&mut self) {
        // flock releases with the fd; the file itself is just litter
        let _ = std::fs::remove_file(&self.path);
    }
}

#[cfg(unix)]
fn try_flock(file: &File) -> Result<(), std::io::Error> {
    use std::os::unix::io::AsRawFd;
    let rc = unsafe { libc::flock(file.as_raw_fd(), libc::LOCK_EX | libc::LOCK_NB) };
    if rc == 0 {
        Ok(())
    } else {
        Err(std::io::Error::last_os_error())
    }
}

#[cfg(not(unix))]
fn try_flock(_file: &File) -> Result<(), std::io::Error> {
    Ok(())
}
