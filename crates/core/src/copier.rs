use crate::error::FileError;
use starbase_utils::fs;
use std::io;
use std::path::Path;
use tracing::trace;

#[cfg(unix)]
use crate::unix::copy_permissions;
#[cfg(windows)]
use crate::windows::copy_permissions;

/// Copy the contents and permissions of `from` into `to`, creating or
/// truncating `to`. This is not atomic: on failure `to` may be left
/// partially written.
pub fn copy_file(from: impl AsRef<Path>, to: impl AsRef<Path>) -> Result<(), FileError> {
    let from = from.as_ref();
    let to = to.as_ref();

    trace!(from = ?from, to = ?to, "Copying file");

    let handle_error = |error: io::Error| FileError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        error: Box::new(error),
    };

    let mut input = fs::open_file(from)?;
    let mut output = fs::create_file(to)?;

    io::copy(&mut input, &mut output).map_err(handle_error)?;

    copy_permissions(from, to)?;

    // Surface write errors now instead of losing them on drop
    output.sync_all().map_err(handle_error)?;

    Ok(())
}
