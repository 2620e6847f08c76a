use crate::error::FileError;
use starbase_utils::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

pub fn copy_permissions(from: &Path, to: &Path) -> Result<(), FileError> {
    let mode = std::fs::metadata(from)
        .map_err(|error| FileError::Stat {
            path: from.to_path_buf(),
            error: Box::new(error),
        })?
        .permissions()
        .mode();

    fs::update_perms(to, Some(mode & 0o7777))?;

    Ok(())
}
