use crate::error::FileError;
use std::env;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::trace;

fn map_resolve_error(path: &Path, error: io::Error) -> FileError {
    if error.kind() == io::ErrorKind::NotFound {
        FileError::NotFound {
            path: path.to_path_buf(),
            error: Box::new(error),
        }
    } else {
        FileError::Resolve {
            path: path.to_path_buf(),
            error: Box::new(error),
        }
    }
}

/// Follow every symlink in `path` and return the real location of the file.
/// Fails with [`FileError::NotFound`] when the file, or any link in the
/// chain leading to it, does not exist.
pub fn resolve_path(path: impl AsRef<Path>) -> Result<PathBuf, FileError> {
    let path = path.as_ref();
    let resolved = dunce::canonicalize(path).map_err(|error| map_resolve_error(path, error))?;

    trace!(path = ?path, resolved = ?resolved, "Resolved real path");

    Ok(resolved)
}

/// Resolve the path of a file that is about to be written to. The file
/// itself may not exist yet, in which case only its parent directory is
/// resolved. A dangling symlink is still a broken chain and fails.
pub fn resolve_target_path(path: impl AsRef<Path>) -> Result<PathBuf, FileError> {
    let path = path.as_ref();

    match std::fs::symlink_metadata(path) {
        Ok(_) => resolve_path(path),
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            let Some(name) = path.file_name() else {
                return Err(map_resolve_error(path, error));
            };

            let parent = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };

            Ok(resolve_path(parent)?.join(name))
        }
        Err(error) => Err(FileError::Stat {
            path: path.to_path_buf(),
            error: Box::new(error),
        }),
    }
}

/// Return an absolute, lexically cleaned version of `path`. Symlinks are
/// not followed.
///
/// # Panics
///
/// Relative paths are joined onto the working directory. If the working
/// directory cannot be determined, the process cannot meaningfully
/// continue and this panics.
pub fn absolute_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();

    if path.is_absolute() {
        return clean_path(path);
    }

    let cwd = env::current_dir().unwrap_or_else(|error| {
        panic!("Unable to determine the current working directory: {error}")
    });

    clean_path(&cwd.join(path))
}

fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                cleaned.pop();
            }
            other => cleaned.push(other.as_os_str()),
        }
    }

    cleaned
}
