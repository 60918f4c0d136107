//! Creation and cleanup of the script-injection FIFO.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use webshell_common::PlatformError;

/// Removes the FIFO from the filesystem when dropped.
#[derive(Debug)]
pub struct FifoGuard {
    path: PathBuf,
}

impl FifoGuard {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for FifoGuard {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "fifo removed"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(path = %self.path.display(), error = %e, "failed to remove fifo"),
        }
    }
}

/// Create a FIFO at `path`, replacing whatever stale object is there.
#[cfg(unix)]
pub fn ensure_fifo(path: &Path) -> Result<FifoGuard, PlatformError> {
    use nix::sys::stat::Mode;

    let fifo_err = |reason: String| PlatformError::FifoError {
        path: path.to_path_buf(),
        reason,
    };

    match std::fs::symlink_metadata(path) {
        Ok(_) => {
            std::fs::remove_file(path)
                .map_err(|e| fifo_err(format!("failed to remove stale entry: {e}")))?;
            debug!(path = %path.display(), "removed stale fifo");
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(fifo_err(e.to_string())),
    }

    nix::unistd::mkfifo(path, Mode::S_IRUSR | Mode::S_IWUSR)
        .map_err(|e| fifo_err(format!("mkfifo failed: {e}")))?;

    debug!(path = %path.display(), "fifo created");
    Ok(FifoGuard {
        path: path.to_path_buf(),
    })
}

#[cfg(not(unix))]
pub fn ensure_fifo(path: &Path) -> Result<FifoGuard, PlatformError> {
    Err(PlatformError::NotSupported(format!(
        "named pipe at {}",
        path.display()
    )))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::fs::FileTypeExt;

    #[test]
    fn creates_fifo() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("webapp.pipe");

        let guard = ensure_fifo(&path).unwrap();
        let meta = std::fs::symlink_metadata(guard.path()).unwrap();
        assert!(meta.file_type().is_fifo());
    }

    #[test]
    fn replaces_stale_regular_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("webapp.pipe");
        std::fs::write(&path, "leftover").unwrap();

        let _guard = ensure_fifo(&path).unwrap();
        let meta = std::fs::symlink_metadata(&path).unwrap();
        assert!(meta.file_type().is_fifo());
    }

    #[test]
    fn recreates_existing_fifo() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("webapp.pipe");

        let first = ensure_fifo(&path).unwrap();
        std::mem::forget(first);
        let _second = ensure_fifo(&path).unwrap();
        assert!(std::fs::symlink_metadata(&path)
            .unwrap()
            .file_type()
            .is_fifo());
    }

    #[test]
    fn guard_drop_removes_fifo() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("webapp.pipe");

        let guard = ensure_fifo(&path).unwrap();
        assert!(path.exists());
        drop(guard);
        assert!(!path.exists());
    }

    #[test]
    fn missing_parent_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("webapp.pipe");

        let err = ensure_fifo(&path).unwrap_err();
        assert!(matches!(err, PlatformError::FifoError { .. }));
    }
}
