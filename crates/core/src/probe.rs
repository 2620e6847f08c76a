use crate::error::FileError;
use crate::resolver::resolve_path;
use std::env;
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};

/// Whether a file exists at `path`. A missing file is `Ok(false)`, but any
/// other failure (an unreadable parent directory for example) is an error,
/// as we can't tell either way.
pub fn file_exists(path: impl AsRef<Path>) -> Result<bool, FileError> {
    let path = path.as_ref();

    match std::fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(error) => Err(FileError::Stat {
            path: path.to_path_buf(),
            error: Box::new(error),
        }),
    }
}

/// Probe whether the current process can open `path` for writing. A denied
/// permission is `Ok(false)`, every other failure is propagated.
pub fn has_write_permission(path: impl AsRef<Path>) -> Result<bool, FileError> {
    let path = path.as_ref();

    match OpenOptions::new().read(true).write(true).open(path) {
        Ok(_) => Ok(true),
        Err(error) if error.kind() == io::ErrorKind::PermissionDenied => Ok(false),
        Err(error) => Err(FileError::Access {
            path: path.to_path_buf(),
            error: Box::new(error),
        }),
    }
}

/// Real location of the running executable, with symlinks resolved.
pub fn current_exe_path() -> Result<PathBuf, FileError> {
    let exe = env::current_exe().map_err(|error| FileError::CurrentExe {
        error: Box::new(error),
    })?;

    resolve_path(exe)
}
