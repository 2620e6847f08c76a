use crate::error::FileError;
use std::path::Path;

// Windows only tracks the read-only attribute, which is all we carry over.
pub fn copy_permissions(from: &Path, to: &Path) -> Result<(), FileError> {
    let perms = std::fs::metadata(from)
        .map_err(|error| FileError::Stat {
            path: from.to_path_buf(),
            error: Box::new(error),
        })?
        .permissions();

    std::fs::set_permissions(to, perms).map_err(|error| FileError::Perms {
        path: to.to_path_buf(),
        error: Box::new(error),
    })
}
